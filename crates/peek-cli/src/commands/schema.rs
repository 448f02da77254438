use peek_core::{ComparisonFacts, ComparisonResponse, RequestState};
use schemars::schema_for;

use crate::cli::{SchemaArgs, SchemaType};

/// Handle `peek schema`.
pub fn handle(args: &SchemaArgs) -> anyhow::Result<()> {
    println!("{}", render(args.type_name)?);
    Ok(())
}

fn render(type_name: SchemaType) -> anyhow::Result<String> {
    let schema = match type_name {
        SchemaType::Response => schema_for!(ComparisonResponse),
        SchemaType::State => schema_for!(RequestState),
        SchemaType::Facts => schema_for!(ComparisonFacts),
    };
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SchemaType::Response, "ComparisonResponse")]
    #[case(SchemaType::State, "RequestState")]
    #[case(SchemaType::Facts, "ComparisonFacts")]
    fn schema_is_titled_json(#[case] type_name: SchemaType, #[case] title: &str) {
        let out = render(type_name).expect("schema should render");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["title"], title);
    }

    #[test]
    fn response_schema_lists_wire_fields() {
        let out = render(SchemaType::Response).expect("schema should render");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        for field in ["product_name", "amazon_price", "flipkart_price", "cheaper_platform", "error"] {
            assert!(parsed["properties"].get(field).is_some(), "missing {field}");
        }
    }
}
