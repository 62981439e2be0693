use anyhow::Result;
use camara_api::{resources::bills, Client};
use serde_json::Value;

use super::{to_value, unknown_operation, QueryArgs};

const OPERATIONS: &[&str] = &["list", "get", "authors", "related", "themes", "history", "votes"];

pub async fn run(args: &QueryArgs, client: &Client) -> Result<Value> {
    let api = client.bills();
    match args.operation.as_str() {
        "list" => {
            let options = args.options(&bills::LIST)?;
            to_value(api.list(options.as_ref()).await?)
        }
        "get" => to_value(api.get(args.numeric_id()?).await?),
        "authors" => to_value(api.authors(args.numeric_id()?).await?),
        "related" => to_value(api.related(args.numeric_id()?).await?),
        "themes" => to_value(api.themes(args.numeric_id()?).await?),
        "history" => {
            let options = args.options(&bills::HISTORY)?;
            to_value(api.history(args.numeric_id()?, options.as_ref()).await?)
        }
        "votes" => {
            let options = args.options(&bills::VOTES)?;
            to_value(api.votes(args.numeric_id()?, options.as_ref()).await?)
        }
        other => Err(unknown_operation("bills", other, OPERATIONS)),
    }
}
