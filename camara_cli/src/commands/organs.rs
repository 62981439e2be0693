use anyhow::Result;
use camara_api::{resources::organs, Client};
use serde_json::Value;

use super::{to_value, unknown_operation, QueryArgs};

const OPERATIONS: &[&str] = &["list", "get", "events", "members", "votes"];

pub async fn run(args: &QueryArgs, client: &Client) -> Result<Value> {
    let api = client.organs();
    match args.operation.as_str() {
        "list" => {
            let options = args.options(&organs::LIST)?;
            to_value(api.list(options.as_ref()).await?)
        }
        "get" => to_value(api.get(args.numeric_id()?).await?),
        "events" => {
            let options = args.options(&organs::EVENTS)?;
            to_value(api.events(args.numeric_id()?, options.as_ref()).await?)
        }
        "members" => {
            let options = args.options(&organs::MEMBERS)?;
            to_value(api.members(args.numeric_id()?, options.as_ref()).await?)
        }
        "votes" => {
            let options = args.options(&organs::VOTES)?;
            to_value(api.votes(args.numeric_id()?, options.as_ref()).await?)
        }
        other => Err(unknown_operation("organs", other, OPERATIONS)),
    }
}
