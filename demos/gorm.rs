//! Parsing ORM-style struct tags.
//!
//! Run with: cargo run --example gorm

use std::error::Error;
use tagspec::parse;

fn main() -> Result<(), Box<dyn Error>> {
    let raw = r#"json:"customer_id,omitempty" gorm:"column:customer_id;default:'ui\\path';index:,unique;not null""#;

    let store = parse(raw)?;

    for tag in &store {
        println!("{}: value = {:?}", tag.name(), tag.value());
        for option in tag.options() {
            println!("  option {option:?}");
        }
        for param in tag.params() {
            println!("  param {} = {:?} (args {:?})", param.name(), param.value(), param.args());
        }
    }

    if let Some(gorm) = store.get_tag("gorm") {
        let unique = gorm.get_param("index").is_some_and(|p| p.has_arg("unique"));
        println!("\ncolumn = {}, unique index = {unique}", gorm.get_param_or("column", "id"));
    }

    println!("\nAs JSON:\n{}", serde_json::to_string_pretty(&store)?);

    Ok(())
}
