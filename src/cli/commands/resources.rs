//! Resources command - show the static hub resources
//!
//! Quick facts, the session plan, partners, downloads, the expert
//! form and the footer. None of this is searchable.

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the show-resources command
#[derive(Args, Debug)]
pub struct ResourcesArgs {}

/// Execute the show-resources command
pub fn execute(
    _args: ResourcesArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let resources = services.resources();

    if format == OutputFormat::Json {
        output::print_output(resources, format);
        return Ok(());
    }

    if !resources.quick_facts.is_empty() {
        output::print_header("Quick facts");
        for fact in &resources.quick_facts {
            println!(
                "  {} {}",
                colors::dim(&format!("[{}]", fact.tag)),
                colors::title(&fact.title)
            );
            println!("    {}", fact.body);
        }
        println!();
    }

    let plan = &resources.session_plan;
    if !plan.steps.is_empty() {
        output::print_header(&plan.title);
        println!("  {}", plan.steps.join(" • "));
        if !plan.note.is_empty() {
            println!("  {}", colors::dim(&plan.note));
        }
        println!();
    }

    if !resources.partners.is_empty() {
        output::print_header("Partners");
        for partner in &resources.partners {
            println!("  {:<20} {}", partner.name, colors::dim(&partner.note));
        }
        println!();
    }

    if !resources.downloads.is_empty() {
        output::print_header("Downloads");
        for download in &resources.downloads {
            println!(
                "  {} {} {}",
                download.name,
                colors::dim(&format!("({})", download.size)),
                colors::dim(&download.href)
            );
        }
        println!();
    }

    let form = &resources.expert_form;
    if !form.fields.is_empty() {
        output::print_header("Submit a question");
        for field in &form.fields {
            println!("  - {field}");
        }
        if !form.response_note.is_empty() {
            println!("  {}", colors::dim(&form.response_note));
        }
        println!();
    }

    let footer = &resources.footer;
    if !footer.disclaimer.is_empty() {
        output::print_header("Disclaimer");
        println!("  {}", footer.disclaimer);
    }
    if !footer.sdg_alignment.is_empty() {
        output::print_header("SDG Alignment");
        for goal in &footer.sdg_alignment {
            println!("  - {goal}");
        }
    }
    if !footer.contact.is_empty() {
        output::print_header("Contact");
        println!("  {}", footer.contact);
    }

    Ok(())
}
