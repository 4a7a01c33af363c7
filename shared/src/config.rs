use std::env;

const DEFAULT_TABLE_NAME: &str = "users";

/// Runtime settings read from the Lambda environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_name: String,
    /// Endpoint override for DynamoDB Local or LocalStack.
    pub dynamodb_endpoint: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            table_name: lookup("TABLE_NAME")
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            dynamodb_endpoint: lookup("DYNAMODB_ENDPOINT").filter(|url| !url.is_empty()),
        }
    }

    /// Build the DynamoDB client, honouring the endpoint override.
    pub fn dynamo_client(&self, sdk_config: &aws_config::SdkConfig) -> aws_sdk_dynamodb::Client {
        match &self.dynamodb_endpoint {
            Some(endpoint) => {
                let dynamo_config = aws_sdk_dynamodb::config::Builder::from(sdk_config)
                    .endpoint_url(endpoint)
                    .build();
                aws_sdk_dynamodb::Client::from_conf(dynamo_config)
            }
            None => aws_sdk_dynamodb::Client::new(sdk_config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.table_name, "users");
        assert_eq!(config.dynamodb_endpoint, None);
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("TABLE_NAME", "LambdaUsers"),
            ("DYNAMODB_ENDPOINT", "http://localhost:8000"),
        ]));
        assert_eq!(config.table_name, "LambdaUsers");
        assert_eq!(config.dynamodb_endpoint.as_deref(), Some("http://localhost:8000"));
    }

    #[test]
    fn test_empty_table_name_falls_back() {
        let config = Config::from_lookup(lookup(&[("TABLE_NAME", "")]));
        assert_eq!(config.table_name, "users");
    }
}
