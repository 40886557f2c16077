//! Fixture stores shared by the unit tests.

use anatomy_types::{ContentRef, Laterality, Region, RegionContent, RegionStructures, StructureRef};

use crate::store::RegionStore;

/// Ids of a region list, for compact assertions.
pub fn ids<'a>(regions: &[&'a Region]) -> Vec<&'a str> {
    regions.iter().map(|r| r.id.as_str()).collect()
}

/// `root -> limb -> {left, right}` with a symmetric contralateral pair.
pub fn limb_regions() -> Vec<Region> {
    vec![
        Region::new("root", "Root")
            .with_ontology_id("FMA:20394")
            .with_children(["root.limb"]),
        Region::new("root.limb", "Limb")
            .with_parent("root")
            .with_children(["root.limb.left", "root.limb.right"])
            .with_level(1),
        Region::new("root.limb.left", "Left Limb")
            .with_parent("root.limb")
            .with_level(2)
            .with_laterality(Laterality::Left)
            .with_contralateral("root.limb.right"),
        Region::new("root.limb.right", "Right Limb")
            .with_parent("root.limb")
            .with_level(2)
            .with_laterality(Laterality::Right)
            .with_contralateral("root.limb.left"),
    ]
}

pub fn limb_fixture() -> RegionStore {
    RegionStore::from_regions(limb_regions()).unwrap()
}

fn forearm(side: Laterality, latin: &str, fma: &str) -> Region {
    let (side_id, side_name, other) = match side {
        Laterality::Left => ("left", "Left", "right"),
        _ => ("right", "Right", "left"),
    };
    let suffix = &side_id[..1];

    let mut structures = RegionStructures::new();
    structures
        .bones
        .push(StructureRef::new(format!("radius-{suffix}"), format!("{side_name} radius")).with_laterality(side));
    structures
        .bones
        .push(StructureRef::new(format!("ulna-{suffix}"), format!("{side_name} ulna")).with_laterality(side));

    Region::new(format!("body.arm.{side_id}.forearm"), format!("{side_name} Forearm"))
        .with_latin_name(latin)
        .with_ontology_id(fma)
        .with_parent(format!("body.arm.{side_id}"))
        .with_level(3)
        .with_laterality(side)
        .with_contralateral(format!("body.arm.{other}.forearm"))
        .with_structures(structures)
}

/// Body with a bilateral arm, both sides and both forearms.
pub fn forearm_fixture() -> RegionStore {
    let mut content = RegionContent::new();
    content.anatomy.push(ContentRef::new(
        "forearm-compartments",
        "Forearm compartments",
        "/content/anatomy/forearm-compartments",
        "article",
    ));

    RegionStore::from_regions([
        Region::new("body", "Human Body")
            .with_ontology_id("FMA:20394")
            .with_children(["body.arm"]),
        Region::new("body.arm", "Arm")
            .with_ontology_id("FMA:7183")
            .with_parent("body")
            .with_children(["body.arm.left", "body.arm.right"])
            .with_level(1)
            .with_laterality(Laterality::Bilateral),
        Region::new("body.arm.left", "Left Arm")
            .with_ontology_id("FMA:7186")
            .with_parent("body.arm")
            .with_children(["body.arm.left.forearm"])
            .with_level(2)
            .with_laterality(Laterality::Left)
            .with_contralateral("body.arm.right"),
        Region::new("body.arm.right", "Right Arm")
            .with_ontology_id("FMA:7185")
            .with_parent("body.arm")
            .with_children(["body.arm.right.forearm"])
            .with_level(2)
            .with_laterality(Laterality::Right)
            .with_contralateral("body.arm.left"),
        forearm(Laterality::Left, "Antebrachium sinistrum", "FMA:9663"),
        forearm(Laterality::Right, "Antebrachium dextrum", "FMA:9664").with_content(content),
    ])
    .unwrap()
}

/// Straight chain `n0 -> n1 -> ... -> n{len-1}`.
pub fn chain_fixture(len: usize) -> RegionStore {
    RegionStore::from_regions((0..len).map(|i| {
        let mut region = Region::new(format!("n{i}"), format!("Node {i}")).with_level(i as u32);
        if i > 0 {
            region = region.with_parent(format!("n{}", i - 1));
        }
        if i + 1 < len {
            region = region.with_children([format!("n{}", i + 1)]);
        }
        region
    }))
    .unwrap()
}

/// Two regions that are each other's parent and child.
pub fn cyclic_fixture() -> RegionStore {
    RegionStore::from_regions([
        Region::new("a", "A").with_parent("b").with_children(["b"]).with_level(1),
        Region::new("b", "B").with_parent("a").with_children(["a"]).with_level(2),
    ])
    .unwrap()
}
