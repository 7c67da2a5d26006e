//! Topic commands - list topics and show one topic's content

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::Topic;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the list-topics command
#[derive(Args, Debug)]
pub struct ListArgs {}

/// Arguments for the show-topic command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Topic key (see list-topics)
    pub key: String,
}

/// Topic summary row
#[derive(Debug, Serialize)]
pub struct TopicSummary {
    pub key: String,
    pub label: String,
    pub sections: usize,
    pub faqs: usize,
}

impl From<&Topic> for TopicSummary {
    fn from(topic: &Topic) -> Self {
        Self {
            key: topic.key.clone(),
            label: topic.label.clone(),
            sections: topic.sections.len(),
            faqs: topic.faqs.len(),
        }
    }
}

/// Summaries of every topic in catalog order
pub fn summaries(services: &Services) -> Vec<TopicSummary> {
    services
        .catalog()
        .topics()
        .iter()
        .map(TopicSummary::from)
        .collect()
}

/// Execute the list-topics command
pub fn execute_list(
    _args: ListArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let topics = summaries(services);

    match format {
        OutputFormat::Human => {
            for topic in &topics {
                println!(
                    "{:<16} {} {}",
                    colors::topic_key(&topic.key),
                    colors::label(&topic.label),
                    colors::dim(&format!(
                        "({} sections, {} faqs)",
                        topic.sections, topic.faqs
                    ))
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&topics)?);
        }
    }

    Ok(())
}

/// Execute the show-topic command
pub fn execute_show(
    args: ShowArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let topic = services.catalog().get(&args.key).map_err(|e| {
        format!("{e}. Run 'resource-hub list-topics' to see available topics.")
    })?;

    match format {
        OutputFormat::Human => {
            println!("{}\n", colors::label(&topic.label));

            for section in &topic.sections {
                println!("{}", colors::title(&section.heading));
                for paragraph in &section.paragraphs {
                    println!("  - {paragraph}");
                }
                println!();
            }

            if !topic.faqs.is_empty() {
                println!("{}", colors::label("FAQs"));
                for faq in &topic.faqs {
                    println!("  {}", colors::title(&faq.question));
                    println!("    {}", faq.answer);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(topic)?);
        }
    }

    Ok(())
}
