use anyhow::{Context, Result};
use log::{error, info};

use resumegen::{assemble, read_resume, render_to_file, LayoutConfig};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        anyhow::bail!("Usage: {} <resume.json> [output.pdf]", args[0]);
    }
    let resume_path = &args[1];
    let pdf_path = args.get(2).map(String::as_str).unwrap_or("resume.pdf");

    info!("Starting generation from {} to {}", resume_path, pdf_path);

    match generate_resume(resume_path, pdf_path) {
        Ok(_) => {
            info!("Generation completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Generation failed: {:?}", e);
            Err(e)
        }
    }
}

fn generate_resume(resume_path: &str, pdf_path: &str) -> Result<()> {
    let resume = read_resume(resume_path)
        .with_context(|| format!("Failed to read resume file: {}", resume_path))?;

    info!("Successfully read resume. Laying out document...");
    let document = assemble(&resume, &LayoutConfig::default());

    render_to_file(&document, pdf_path)
        .with_context(|| format!("Failed to render PDF: {}", pdf_path))?;

    Ok(())
}
