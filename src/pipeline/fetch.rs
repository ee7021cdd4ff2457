use crate::error::FetchError;
use crate::utils::logs::{PipelineLog, Stage};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use url::Url;

/// 上游数据获取器
///
/// 持有显式传入的 HTTP 客户端，每次运行构建一次。
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    url: Url,
}

impl Fetcher {
    pub fn new(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    /// 使用默认客户端（开启 gzip 透明解压）
    pub fn with_default_client(url: Url) -> Result<Self, FetchError> {
        let client = Client::builder()
            .gzip(true)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self::new(client, url))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// 发起一次 GET 请求并解析为 JSON 数组
    ///
    /// 只有 200 视为成功，其它状态码一律返回 `FetchError::Status`。
    pub async fn fetch(&self, log: &dyn PipelineLog) -> Result<Vec<Value>, FetchError> {
        let url = self.url.to_string();
        log.debug(Stage::Fetch, &format!("GET {}", url));

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        // 先取字节再解析，便于区分网络错误和 JSON 错误
        let body = response.bytes().await.map_err(|e| FetchError::Network {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let value: Value = serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            url: url.clone(),
            message: e.to_string(),
        })?;

        match value {
            Value::Array(records) => {
                log.debug(
                    Stage::Fetch,
                    &format!("received {} records ({} bytes)", records.len(), body.len()),
                );
                Ok(records)
            }
            other => Err(FetchError::Decode {
                url,
                message: format!("顶层应为数组，实际为{}", json_kind(&other)),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "布尔值",
        Value::Number(_) => "数字",
        Value::String(_) => "字符串",
        Value::Array(_) => "数组",
        Value::Object(_) => "对象",
    }
}
