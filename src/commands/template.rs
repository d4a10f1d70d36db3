//! Implementation of the `perchance template` subcommands.

use crate::cli::{TemplateSaveArgs, TemplateShowArgs, parse_set};
use crate::context::AppContext;
use crate::error::Result;
use crate::prompt::GenerationConfig;
use crate::store::SavedTemplate;

/// Execute `perchance template save`.
pub fn cmd_template_save(ctx: &AppContext, args: TemplateSaveArgs) -> Result<()> {
    let saved = save(ctx, &args)?;
    println!(
        "Saved template '{}' ({}) to {}",
        saved.name,
        saved.id,
        ctx.templates_dir.display()
    );
    Ok(())
}

/// Execute `perchance template show`.
pub fn cmd_template_show(ctx: &AppContext, args: TemplateShowArgs) -> Result<()> {
    let template = ctx.template_store().load(&args.name)?;
    print!("{}", describe_template(&template));
    Ok(())
}

/// Execute `perchance template list`.
pub fn cmd_template_list(ctx: &AppContext) -> Result<()> {
    let templates = ctx.template_store().list()?;
    if templates.is_empty() {
        println!("No saved templates in {}", ctx.templates_dir.display());
        return Ok(());
    }
    for template in templates {
        println!("{}", template.name);
    }
    Ok(())
}

/// Validate and store the request described by `args`.
///
/// The style must exist in the catalog so a saved template is usable later.
pub(super) fn save(ctx: &AppContext, args: &TemplateSaveArgs) -> Result<SavedTemplate> {
    let mut config = GenerationConfig::new(&args.style, &args.subject);
    for arg in &args.set {
        let (name, value) = parse_set(arg)?;
        config.overrides.insert(name, value);
    }
    config.validate()?;
    ctx.catalog()?.get(&config.style)?;

    ctx.template_store().save(&args.name, &config)
}

pub(super) fn describe_template(template: &SavedTemplate) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", template.name, template.id));
    out.push_str(&format!(
        "Created:  {}\n",
        template.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("Style:    {}\n", template.config.style));
    out.push_str(&format!("Subject:  {}\n", template.config.subject));
    if !template.config.overrides.is_empty() {
        out.push_str("Overrides:\n");
        for (name, value) in &template.config.overrides {
            out.push_str(&format!("  {} = {}\n", name, value));
        }
    }
    out
}
