use anyhow::Result;
use camara_api::{resources::legislators, Client};
use serde_json::Value;

use super::{to_value, unknown_operation, QueryArgs};

const OPERATIONS: &[&str] = &[
    "list", "get", "expenses", "speeches", "events", "fronts", "occupations", "organs",
    "professions",
];

pub async fn run(args: &QueryArgs, client: &Client) -> Result<Value> {
    let api = client.legislators();
    match args.operation.as_str() {
        "list" => {
            let options = args.options(&legislators::LIST)?;
            to_value(api.list(options.as_ref()).await?)
        }
        "get" => to_value(api.get(args.numeric_id()?).await?),
        "expenses" => {
            let options = args.options(&legislators::EXPENSES)?;
            to_value(api.expenses(args.numeric_id()?, options.as_ref()).await?)
        }
        "speeches" => {
            let options = args.options(&legislators::SPEECHES)?;
            to_value(api.speeches(args.numeric_id()?, options.as_ref()).await?)
        }
        "events" => {
            let options = args.options(&legislators::EVENTS)?;
            to_value(api.events(args.numeric_id()?, options.as_ref()).await?)
        }
        "fronts" => to_value(api.fronts(args.numeric_id()?).await?),
        "occupations" => to_value(api.occupations(args.numeric_id()?).await?),
        "organs" => {
            let options = args.options(&legislators::ORGANS)?;
            to_value(api.organs(args.numeric_id()?, options.as_ref()).await?)
        }
        "professions" => to_value(api.professions(args.numeric_id()?).await?),
        other => Err(unknown_operation("legislators", other, OPERATIONS)),
    }
}
