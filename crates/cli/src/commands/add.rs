use anyhow::{Context as _, Result};
use passage_archive_core::FormInput;

use crate::{open_service, AddArgs};

fn read_passage(args: &AddArgs) -> Result<String> {
    match (&args.passage, &args.passage_file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read passage file {}", path.display())),
        (None, None) => Ok(String::new()),
    }
}

pub(crate) async fn run(args: AddArgs) -> Result<()> {
    let passage_text = read_passage(&args)?;
    let form = FormInput {
        category: args.category,
        grade: args.grade,
        year: args.year,
        month: args.month,
        item_number: args.item_number,
        textbook: args.textbook,
        new_textbook: args.new_textbook,
        unit: args.unit,
        add_unit: args.add_unit,
        source: args.source,
        passage_text,
        clean_text: args.clean,
        continuous: false,
    };

    let outcome = open_service()?.submit(&form).await?;
    println!("{}", serde_json::to_string_pretty(&outcome.record)?);
    Ok(())
}
