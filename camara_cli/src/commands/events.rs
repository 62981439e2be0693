use anyhow::Result;
use camara_api::{resources::events, Client};
use serde_json::Value;

use super::{to_value, unknown_operation, QueryArgs};

const OPERATIONS: &[&str] = &["list", "get", "legislators", "organs", "agenda", "votes"];

pub async fn run(args: &QueryArgs, client: &Client) -> Result<Value> {
    let api = client.events();
    match args.operation.as_str() {
        "list" => {
            let options = args.options(&events::LIST)?;
            to_value(api.list(options.as_ref()).await?)
        }
        "get" => to_value(api.get(args.numeric_id()?).await?),
        "legislators" => to_value(api.legislators(args.numeric_id()?).await?),
        "organs" => to_value(api.organs(args.numeric_id()?).await?),
        "agenda" => to_value(api.agenda(args.numeric_id()?).await?),
        "votes" => to_value(api.votes(args.numeric_id()?).await?),
        other => Err(unknown_operation("events", other, OPERATIONS)),
    }
}
