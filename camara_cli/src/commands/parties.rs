use anyhow::Result;
use camara_api::{resources::parties, Client};
use serde_json::Value;

use super::{to_value, unknown_operation, QueryArgs};

const OPERATIONS: &[&str] = &["list", "get", "leaders", "members"];

pub async fn run(args: &QueryArgs, client: &Client) -> Result<Value> {
    let api = client.parties();
    match args.operation.as_str() {
        "list" => {
            let options = args.options(&parties::LIST)?;
            to_value(api.list(options.as_ref()).await?)
        }
        "get" => to_value(api.get(args.numeric_id()?).await?),
        "leaders" => to_value(api.leaders(args.numeric_id()?).await?),
        "members" => {
            let options = args.options(&parties::MEMBERS)?;
            to_value(api.members(args.numeric_id()?, options.as_ref()).await?)
        }
        other => Err(unknown_operation("parties", other, OPERATIONS)),
    }
}
