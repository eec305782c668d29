//! Scopegate CLI entrypoint.
//!
//! Ingests a syllabus text file, analyzes a questions file against it, and
//! prints one JSON verdict per question.

use mimalloc::MiMalloc;

use scopegate::completion::GenaiCompletion;
use scopegate::config::Config;
use scopegate::embedding::StubEmbedder;
use scopegate::pipeline::Analyzer;
use scopegate::syllabus::SyllabusMetadata;
use scopegate::vectordb::QdrantClient;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let (syllabus_path, questions_path) = match (args.next(), args.next()) {
        (Some(s), Some(q)) => (s, q),
        _ => {
            eprintln!("usage: scopegate <syllabus.txt> <questions.txt>");
            std::process::exit(2);
        }
    };

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        qdrant_url = %config.qdrant_url,
        collection = %config.collection,
        threshold = config.similarity_threshold,
        top_k = config.top_k,
        "Scopegate starting"
    );

    // The real embedding model lives outside this crate; without one wired
    // in, retrieval runs on the deterministic stub.
    tracing::warn!("No embedding model wired in; using the deterministic stub embedder");
    let embedder = StubEmbedder::with_dim(config.embedding_dim as usize);

    let search = QdrantClient::new(&config.qdrant_url).await?;
    search.health_check().await?;

    let completion = GenaiCompletion::new(config.completion_config())?;

    let analyzer = Analyzer::new(embedder, search, completion, config.analyzer_settings());
    analyzer.ensure_collection().await?;

    let syllabus_text = std::fs::read_to_string(&syllabus_path)?;
    let syllabus_id = analyzer
        .ingest_syllabus(&syllabus_text, SyllabusMetadata::default())
        .await?;
    tracing::info!(syllabus_id = %syllabus_id, "Syllabus ingested");

    let questions_text = std::fs::read_to_string(&questions_path)?;
    let verdicts = analyzer.analyze(&questions_text).await?;

    for verdict in &verdicts {
        println!("{}", serde_json::to_string_pretty(verdict)?);
    }

    let admitted = verdicts.iter().filter(|v| v.in_syllabus).count();
    tracing::info!(
        questions = verdicts.len(),
        admitted,
        "Analysis complete"
    );

    Ok(())
}
