//! Demo wiring a tool registry behind the caching resolver, including
//! lifecycle-driven eviction when a backing component is replaced.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tracing::info;

use toolcall_primitives::ToolDefinition;
use toolcall_registry::{FunctionTool, ToolRegistry};
use toolcall_resolution::{
    CachingResolver, DestructionListener, DestructionNotifier, ToolResolver,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    info!("=== toolcall: resolver demo ===");

    let registry = Arc::new(ToolRegistry::new());
    register_tools(&registry)?;

    let resolver = Arc::new(CachingResolver::new(
        Arc::clone(&registry) as Arc<dyn ToolResolver>
    ));
    let notifier = DestructionNotifier::new();
    notifier.subscribe(Arc::clone(&resolver) as Arc<dyn DestructionListener>);

    // First lookup resolves through the registry; the second is a cache hit.
    let sum = resolver
        .resolve("sum")
        .await?
        .context("sum tool is registered")?;
    let total = sum.call(json!([1, 2, 3, 4])).await?;
    info!(%total, "invoked `sum` through the caching resolver");

    let again = resolver.resolve("sum").await?.context("cached")?;
    info!(
        same_instance = Arc::ptr_eq(&sum, &again),
        "second lookup served from cache"
    );

    // A lookup for a name nobody registered caches the miss as well.
    let missing = resolver.resolve("translate").await?;
    info!(found = missing.is_some(), "looked up unregistered `translate`");

    // The host tears the `sum` component down and ships a replacement; the
    // destruction event evicts the stale callback.
    registry.remove("sum");
    registry.register(FunctionTool::shared(
        ToolDefinition::new("sum", "2.0.0")?.with_description("Sum of a JSON array, v2"),
        |input: Value| async move {
            let total: i64 = input
                .as_array()
                .map(|items| items.iter().filter_map(Value::as_i64).sum())
                .unwrap_or_default();
            Ok(json!({ "total": total }))
        },
    ))?;
    notifier.notify("sum");

    let fresh = resolver
        .resolve("sum")
        .await?
        .context("replacement is registered")?;
    info!(
        version = fresh.definition().version(),
        "re-resolved `sum` after component destruction"
    );

    Ok(())
}

fn register_tools(registry: &ToolRegistry) -> Result<()> {
    registry.register(FunctionTool::shared(
        ToolDefinition::new("echo", "1.0.0")?.with_description("Echo incoming payload"),
        |input: Value| async move { Ok(input) },
    ))?;

    registry.register(FunctionTool::shared(
        ToolDefinition::new("sum", "1.0.0")?.with_description("Sum of a JSON array"),
        |input: Value| async move {
            let total: i64 = input
                .as_array()
                .map(|items| items.iter().filter_map(Value::as_i64).sum())
                .unwrap_or_default();
            Ok(Value::from(total))
        },
    ))?;

    Ok(())
}
