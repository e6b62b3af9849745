use anyhow::{Context, Result};
use tracing::info;

use pubdoi_cli::config::Config;
use pubdoi_cli::pipeline::{PipelineContext, process_table};
use pubdoi_cli::types::ProcessResult;
use pubdoi_ingest::MetadataTable;
use pubdoi_registry::{DataCiteClient, RegistryCredentials};
use pubdoi_store::{S3Credentials, S3Store};

use crate::cli::ProcessArgs;

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let config = Config::from_env().context("load configuration")?;
    let store = S3Store::new(
        config.store.bucket,
        config.store.region,
        S3Credentials {
            access_key_id: config.store.access_key_id,
            secret_access_key: config.store.secret_access_key,
        },
    )
    .context("build object store client")?;
    let registry = DataCiteClient::new(
        config.registry.base_url,
        config.registry.repository_id,
        RegistryCredentials {
            username: config.registry.username,
            password: config.registry.password,
        },
    )
    .context("build registry client")?;
    let repository = registry
        .verify_repository()
        .context("verify repository access")?;

    let mut table = MetadataTable::read_csv(&args.csv_path)
        .with_context(|| format!("read {}", args.csv_path.display()))?;
    table.ensure_column("file_url");
    table.ensure_column("doi");
    info!(
        rows = table.row_count(),
        data_dir = %args.data_dir.display(),
        "starting batch pass"
    );

    let ctx = PipelineContext {
        store: &store,
        registry: &registry,
        data_dir: &args.data_dir,
        prefix: repository.prefix.as_deref(),
        dry_run: args.dry_run,
    };
    let result = process_table(&ctx, &mut table, &args.csv_path);

    // One write at the end of the pass; a failed run leaves the input as
    // it was plus whatever earlier rows completed.
    if !args.dry_run {
        table
            .write_csv(&args.csv_path)
            .with_context(|| format!("write {}", args.csv_path.display()))?;
    }
    Ok(result)
}

pub fn run_verify() -> Result<()> {
    let config = Config::from_env().context("load configuration")?;
    let registry = DataCiteClient::new(
        config.registry.base_url.clone(),
        config.registry.repository_id.clone(),
        RegistryCredentials {
            username: config.registry.username,
            password: config.registry.password,
        },
    )
    .context("build registry client")?;
    let repository = registry
        .verify_repository()
        .context("verify repository access")?;
    println!("Repository: {}", repository.name);
    println!("Endpoint:   {}", config.registry.base_url);
    match repository.prefix {
        Some(prefix) => println!("Prefix:     {prefix}"),
        None => println!("Prefix:     (none assigned)"),
    }
    Ok(())
}
