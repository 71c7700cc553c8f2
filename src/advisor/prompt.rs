//! Prompts sent to the remote advisor, rendered with Handlebars.
//! Escaping is turned off since the output is plain text for the
//! model, not markup.

use std::fmt;

use anyhow::{Error, Result};
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

use crate::catalog::Product;

#[derive(Debug)]
pub enum Prompt {
    RoutineSystem,
    Routine,
    FollowUpSystem,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const ROUTINE_SYSTEM_PROMPT: &str = "You are a professional L'Oréal beauty advisor. You provide personalized skincare, haircare, makeup, and beauty routines. You are knowledgeable, friendly, and always put the customer's needs first.";

const ROUTINE_PROMPT: &str = r"You are an expert beauty and skincare advisor for L'Oréal. A customer has selected the following products:

{{products_json}}

Please create a personalized, step-by-step routine using ONLY these selected products. Include:
1. The order in which to use them (AM/PM routines if applicable)
2. How to apply each product
3. Why each product is beneficial
4. Any important tips or precautions

Be warm, professional, and helpful. Format your response in a clear, easy-to-read manner.";

const FOLLOW_UP_SYSTEM_PROMPT: &str = r"You are a professional L'Oréal beauty advisor. You help customers with skincare, haircare, makeup, fragrance, and beauty routines. You are knowledgeable, friendly, and supportive.

{{#if has_routine}}The customer has generated a routine. Here are their selected products:
{{#each products}}
- {{brand}} {{name}}
{{/each}}
{{else}}The customer has not yet generated a routine.
{{/if}}

Answer questions about beauty, skincare, haircare, makeup, and their routine. Keep responses helpful and concise.";

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_escape_fn(handlebars::no_escape);
    registry
        .register_template_string(&Prompt::RoutineSystem.to_string(), ROUTINE_SYSTEM_PROMPT)
        .expect("Failed to register template");
    registry
        .register_template_string(&Prompt::Routine.to_string(), ROUTINE_PROMPT)
        .expect("Failed to register template");
    registry
        .register_template_string(&Prompt::FollowUpSystem.to_string(), FOLLOW_UP_SYSTEM_PROMPT)
        .expect("Failed to register template");
    registry
}

// The fields of a product the model gets to see
#[derive(Serialize)]
struct ProductSummary<'a> {
    name: &'a str,
    brand: &'a str,
    category: &'a str,
    description: &'a str,
}

pub fn routine_system_prompt(registry: &Handlebars) -> Result<String, Error> {
    Ok(registry.render(&Prompt::RoutineSystem.to_string(), &json!({}))?)
}

pub fn routine_prompt(registry: &Handlebars, products: &[Product]) -> Result<String, Error> {
    let summaries: Vec<ProductSummary> = products
        .iter()
        .map(|p| ProductSummary {
            name: &p.name,
            brand: &p.brand,
            category: p.category.key(),
            description: &p.description,
        })
        .collect();
    let products_json = serde_json::to_string_pretty(&summaries)?;
    Ok(registry.render(
        &Prompt::Routine.to_string(),
        &json!({ "products_json": products_json }),
    )?)
}

/// System instruction for follow-up questions. `routine_products` is
/// the product list of the current routine, if one was generated.
pub fn follow_up_system_prompt(
    registry: &Handlebars,
    routine_products: Option<&[Product]>,
) -> Result<String, Error> {
    let ctx = json!({
        "has_routine": routine_products.is_some(),
        "products": routine_products.unwrap_or_default(),
    });
    Ok(registry.render(&Prompt::FollowUpSystem.to_string(), &ctx)?)
}
