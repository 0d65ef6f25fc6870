//! Behavior tests for the bundled in-memory backend, exercised through the
//! `AsyncCache` trait the way a wrapped backend would be.

use std::time::Duration;

use traced_cache::{AsyncCache, CacheError, MemoryCache};

#[tokio::test]
async fn roundtrip_through_the_trait() -> anyhow::Result<()> {
    let cache = MemoryCache::new();

    cache.set("foo", "bar".to_string(), None).await?;
    assert_eq!(cache.get("foo").await?, Some("bar".to_string()));
    assert!(cache.has("foo").await?);

    cache.delete("foo").await?;
    assert_eq!(cache.get("foo").await?, None);
    assert!(!cache.has("foo").await?);
    Ok(())
}

#[tokio::test]
async fn clear_empties_the_cache() -> anyhow::Result<()> {
    let cache = MemoryCache::new();
    cache.set("a", 1, None).await?;
    cache.set("b", 2, None).await?;

    cache.clear().await?;

    assert_eq!(cache.get("a").await?, None);
    assert_eq!(cache.get("b").await?, None);
    Ok(())
}

#[tokio::test]
async fn batch_operations_preserve_key_order() -> anyhow::Result<()> {
    let cache = MemoryCache::new();
    cache
        .set_multiple(
            &[("foo".to_string(), 1), ("baz".to_string(), 2)],
            None,
        )
        .await?;

    let values = cache
        .get_multiple(&["baz".to_string(), "missing".to_string(), "foo".to_string()])
        .await?;
    assert_eq!(values, vec![Some(2), None, Some(1)]);

    cache
        .delete_multiple(&["foo".to_string(), "baz".to_string()])
        .await?;
    assert_eq!(cache.get("foo").await?, None);
    assert_eq!(cache.get("baz").await?, None);
    Ok(())
}

#[tokio::test]
async fn expired_entries_are_gone_from_every_read_path() -> anyhow::Result<()> {
    let cache = MemoryCache::new();
    cache.set("short", "lived".to_string(), Some(Duration::ZERO)).await?;
    cache.set("long", "lived".to_string(), Some(Duration::from_secs(600))).await?;

    assert_eq!(cache.get("short").await?, None);
    assert!(!cache.has("short").await?);
    assert_eq!(
        cache
            .get_multiple(&["short".to_string(), "long".to_string()])
            .await?,
        vec![None, Some("lived".to_string())]
    );
    Ok(())
}

#[tokio::test]
async fn eviction_only_kicks_in_past_the_limit() -> anyhow::Result<()> {
    let cache = MemoryCache::with_limit(3);
    for (i, key) in ["a", "b", "c"].iter().enumerate() {
        cache.set(key, i, None).await?;
    }
    assert!(cache.has("a").await?);

    cache.set("d", 3, None).await?;
    assert!(!cache.has("a").await?);
    assert!(cache.has("b").await?);
    assert!(cache.has("d").await?);
    Ok(())
}

#[tokio::test]
async fn empty_key_is_rejected_with_invalid_key() {
    let cache = MemoryCache::new();
    let err = cache.set("", 1, None).await.unwrap_err();
    assert!(matches!(err, CacheError::InvalidKey(_)));

    // Batch writes surface the same rejection.
    let err = cache
        .set_multiple(&[("ok".to_string(), 1), (String::new(), 2)], None)
        .await
        .unwrap_err();
    assert!(matches!(err, CacheError::InvalidKey(_)));
}
