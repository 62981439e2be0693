use anyhow::Result;
use camara_api::{resources::blocs, Client};
use serde_json::Value;

use super::{to_value, unknown_operation, QueryArgs};

const OPERATIONS: &[&str] = &["list", "get"];

pub async fn run(args: &QueryArgs, client: &Client) -> Result<Value> {
    let api = client.blocs();
    match args.operation.as_str() {
        "list" => {
            let options = args.options(&blocs::LIST)?;
            to_value(api.list(options.as_ref()).await?)
        }
        "get" => to_value(api.get(args.numeric_id()?).await?),
        other => Err(unknown_operation("blocs", other, OPERATIONS)),
    }
}
