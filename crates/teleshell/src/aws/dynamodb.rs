//! AWS DynamoDB table listing.
use aws_config::SdkConfig;

use super::text;
use crate::Cmdlet;

/// Lists the table names of the account and region.
///
/// DynamoDB continues a listing from the last table name it returned, rather
/// than from an opaque token.
#[derive(Clone, Debug, clap::Args, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTables {
    /// Start after this table. Giving a name fetches that page only.
    #[arg(long)]
    pub exclusive_start_table_name: Option<String>,
    /// Maximum number of table names per page.
    #[arg(long)]
    pub limit: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTablesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_start_table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTablesResponse {
    pub table_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_evaluated_table_name: Option<String>,
}

impl Cmdlet for ListTables {
    const NAME: &'static str = "dynamodb:ListTables";
    const DEFAULT_SELECT: &'static str = "TableNames";

    type Provider = SdkConfig;
    type Request = ListTablesRequest;
    type Response = ListTablesResponse;

    fn request(&self) -> Self::Request {
        ListTablesRequest {
            exclusive_start_table_name: self.exclusive_start_table_name.clone(),
            limit: self.limit,
        }
    }

    async fn invoke(cfg: &SdkConfig, request: &Self::Request) -> anyhow::Result<Self::Response> {
        let client = aws_sdk_dynamodb::Client::new(cfg);
        let out = client
            .list_tables()
            .set_exclusive_start_table_name(request.exclusive_start_table_name.clone())
            .set_limit(request.limit)
            .send()
            .await?;
        Ok(ListTablesResponse {
            table_names: out.table_names().to_vec(),
            last_evaluated_table_name: text(out.last_evaluated_table_name()),
        })
    }

    fn continuation(response: &Self::Response) -> Option<String> {
        response.last_evaluated_table_name.clone()
    }

    fn token(request: &Self::Request) -> Option<&str> {
        request.exclusive_start_table_name.as_deref()
    }

    fn continue_with(request: &mut Self::Request, token: String) {
        request.exclusive_start_table_name = Some(token);
    }

    fn auto_iterate(&self) -> bool {
        self.exclusive_start_table_name.is_none()
    }
}
