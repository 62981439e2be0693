use anyhow::Result;
use camara_api::{resources::votes, Client};
use serde_json::Value;

use super::{to_value, unknown_operation, QueryArgs};

const OPERATIONS: &[&str] = &["list", "get", "orientations", "ballots"];

/// Vote ids are strings such as `2265603-43`, so they are passed as given.
pub async fn run(args: &QueryArgs, client: &Client) -> Result<Value> {
    let api = client.votes();
    match args.operation.as_str() {
        "list" => {
            let options = args.options(&votes::LIST)?;
            to_value(api.list(options.as_ref()).await?)
        }
        "get" => to_value(api.get(args.raw_id()?).await?),
        "orientations" => to_value(api.orientations(args.raw_id()?).await?),
        "ballots" => to_value(api.ballots(args.raw_id()?).await?),
        other => Err(unknown_operation("votes", other, OPERATIONS)),
    }
}
