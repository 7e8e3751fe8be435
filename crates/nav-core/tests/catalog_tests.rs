use nav_core::{Catalog, Glow, Visual, DESTINATIONS};
use std::collections::HashSet;

#[test]
fn destination_ids_are_unique() {
    let mut seen = HashSet::new();
    for d in DESTINATIONS {
        assert!(seen.insert(d.id), "duplicate destination id {}", d.id);
    }
}

#[test]
fn catalog_lookup_roundtrips_every_entry() {
    let catalog = Catalog::new();
    assert_eq!(catalog.len(), DESTINATIONS.len());
    for d in DESTINATIONS {
        let found = catalog.get(d.id).expect("catalog entry missing");
        assert_eq!(found.id, d.id);
        assert_eq!(found.name, d.name);
    }
}

#[test]
fn catalog_lookup_unknown_id_is_none() {
    let catalog = Catalog::new();
    assert!(catalog.get("vulcan").is_none());
    assert!(catalog.get("").is_none());
}

#[test]
fn compact_objects_use_the_singularity_visual() {
    let catalog = Catalog::new();
    let hole = catalog.get("blackhole_cygnus").unwrap();
    assert_eq!(hole.visual, Visual::Singularity);
    for d in DESTINATIONS.iter().filter(|d| d.id != "blackhole_cygnus") {
        assert_eq!(d.visual, Visual::Sphere, "unexpected visual for {}", d.id);
    }
}

#[test]
fn glow_palette_produces_distinct_tints() {
    let tints = [
        Glow::Red,
        Glow::Blue,
        Glow::Yellow,
        Glow::Purple,
        Glow::Emerald,
        Glow::Cyan,
    ];
    let mut seen = HashSet::new();
    for g in tints {
        assert!(seen.insert(g.rgb()), "duplicate rgb for {g:?}");
    }
}
