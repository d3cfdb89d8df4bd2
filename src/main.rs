use anyhow::Context;

use es_template::config::AppConfig;
use es_template::es::codec;

fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the JSON output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("es_template=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load()?;
    let codec_config = config.codec;
    tracing::info!(
        "Canonicalizing {:?} document from {}",
        codec_config.document,
        codec_config.input
    );

    let input = std::fs::read_to_string(&codec_config.input)
        .with_context(|| format!("Failed to read {}", codec_config.input))?;

    let output = codec::canonicalize(&input, codec_config.document, codec_config.pretty)
        .with_context(|| format!("Invalid document in {}", codec_config.input))?;

    match codec_config.output {
        Some(path) => {
            std::fs::write(&path, format!("{output}\n"))
                .with_context(|| format!("Failed to write {path}"))?;
            tracing::info!("Wrote {} bytes to {path}", output.len() + 1);
        }
        None => println!("{output}"),
    }

    Ok(())
}
