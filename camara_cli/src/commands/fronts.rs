use anyhow::Result;
use camara_api::{resources::fronts, Client};
use serde_json::Value;

use super::{to_value, unknown_operation, QueryArgs};

const OPERATIONS: &[&str] = &["list", "get", "members"];

pub async fn run(args: &QueryArgs, client: &Client) -> Result<Value> {
    let api = client.fronts();
    match args.operation.as_str() {
        "list" => {
            let options = args.options(&fronts::LIST)?;
            to_value(api.list(options.as_ref()).await?)
        }
        "get" => to_value(api.get(args.numeric_id()?).await?),
        "members" => to_value(api.members(args.numeric_id()?).await?),
        other => Err(unknown_operation("fronts", other, OPERATIONS)),
    }
}
