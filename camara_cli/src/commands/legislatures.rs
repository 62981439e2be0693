use anyhow::Result;
use camara_api::{resources::legislatures, Client};
use serde_json::Value;

use super::{to_value, unknown_operation, QueryArgs};

const OPERATIONS: &[&str] = &["list", "get", "leaders", "board"];

pub async fn run(args: &QueryArgs, client: &Client) -> Result<Value> {
    let api = client.legislatures();
    match args.operation.as_str() {
        "list" => {
            let options = args.options(&legislatures::LIST)?;
            to_value(api.list(options.as_ref()).await?)
        }
        "get" => to_value(api.get(args.numeric_id()?).await?),
        "leaders" => to_value(api.leaders(args.numeric_id()?).await?),
        "board" => {
            let options = args.options(&legislatures::BOARD)?;
            to_value(api.board(args.numeric_id()?, options.as_ref()).await?)
        }
        other => Err(unknown_operation("legislatures", other, OPERATIONS)),
    }
}
