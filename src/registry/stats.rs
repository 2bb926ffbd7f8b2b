use crate::registry::IndexableRegistry;
use crate::registry::types::{Rank, ResId};
use crate::resources::describe_icon_ref;
use ahash::AHashMap;
use serde::Serialize;

/// Summary numbers for a registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub total: usize,
    pub with_data_source: usize,
    pub without_data_source: usize,
    pub min_rank: Option<Rank>,
    pub max_rank: Option<Rank>,
    /// (icon, record count), most used first
    pub icons: Vec<(ResId, usize)>,
}

impl RegistryStats {
    pub fn collect(registry: &IndexableRegistry) -> Self {
        let mut icon_counts: AHashMap<ResId, usize> = AHashMap::new();
        let mut with_data_source = 0;

        for record in registry.records() {
            *icon_counts.entry(record.icon_ref).or_insert(0) += 1;
            if record.has_data_source() {
                with_data_source += 1;
            }
        }

        let mut icons: Vec<_> = icon_counts.into_iter().collect();
        icons.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        Self {
            total: registry.size(),
            with_data_source,
            without_data_source: registry.size() - with_data_source,
            min_rank: registry.records().map(|r| r.rank).min(),
            max_rank: registry.records().map(|r| r.rank).max(),
            icons,
        }
    }
}

/// Display registry statistics
pub fn show_stats(registry: &IndexableRegistry) {
    let stats = RegistryStats::collect(registry);

    println!("Registry Statistics");
    println!("===================");
    println!();
    println!("Entries:              {}", stats.total);
    println!("With data source:     {}", stats.with_data_source);
    println!("Without data source:  {}", stats.without_data_source);

    if let (Some(min), Some(max)) = (stats.min_rank, stats.max_rank) {
        println!("Rank span:            {} .. {}", min, max);
    }

    println!();
    println!("Entries by icon:");
    for (icon, count) in stats.icons.iter().take(15) {
        println!("  {:40} {}", describe_icon_ref(*icon), count);
    }

    if stats.icons.len() > 15 {
        println!("  ... and {} more", stats.icons.len() - 15);
    }
}
