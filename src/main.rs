use emoji_gen_lib::pipeline::Outcome;

fn main() {
    match emoji_gen_lib::run() {
        Ok(Outcome::Saved { count }) => log::debug!("写入 {} 条记录", count),
        Ok(Outcome::NoData) => log::warn!("没有可写入的数据，未生成输出文件"),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("FATAL ERROR: {}", e);
            std::process::exit(1);
        }
    }
}
