//! Builds the default house in a freshly seeded document and prints a
//! summary of the generated elements.
//!
//! ```text
//! cargo run --example build_house
//! RUST_LOG=gablehouse=debug cargo run --example build_house
//! ```

use gablehouse::math::LengthUnit;
use gablehouse::model::{CatalogType, Category, Document, Level};
use gablehouse::operations::{BuildHouse, BuildingConfig};
use gablehouse::tessellation::TessellateRoof;
use gablehouse::Result;

fn seed(unit: LengthUnit) -> Result<Document> {
    let mut doc = Document::new();
    doc.add_level(Level::new("Level 1", 0.0))?;
    doc.add_level(Level::new("Level 2", unit.to_internal(4000.0)?))?;

    let catalog = doc.catalog_mut();
    let wall = catalog.add(
        CatalogType::new(Category::Wall, "Basic Wall", "Generic - 200mm")
            .with_width(unit.to_internal(200.0)?)
            .activated(),
    );
    catalog.set_default(Category::Wall, wall)?;
    catalog.add(CatalogType::new(Category::Door, "Single-Flush", "0915 x 2134mm"));
    catalog.add(CatalogType::new(Category::Window, "Fixed", "0915 x 1830mm"));
    catalog.add(CatalogType::new(Category::Roof, "Basic Roof", "Generic - 400mm"));
    Ok(doc)
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for gablehouse.
    // Override with RUST_LOG env var (e.g. RUST_LOG=gablehouse=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("gablehouse=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = BuildingConfig::default();
    let mut doc = seed(config.unit)?;
    let house = BuildHouse::new(config).execute(&mut doc)?;

    for (i, &id) in house.walls.iter().enumerate() {
        let wall = doc.wall(id)?;
        println!(
            "wall {i}: {} -> {} (length {:.1} mm, height {:.1} mm)",
            wall.centerline.start(),
            wall.centerline.end(),
            LengthUnit::Millimeters.from_internal(wall.centerline.length())?,
            LengthUnit::Millimeters.from_internal(doc.wall_height(id)?)?,
        );
    }
    for &id in std::iter::once(&house.door).chain(&house.windows) {
        let opening = doc.opening(id)?;
        println!("{}: {}", opening.category, opening.point);
    }

    let roof = doc.roof(house.roof)?;
    let mesh = TessellateRoof::new(&roof.profile).execute()?;
    println!(
        "roof: ridge {} span [{:.3}, {:.3}] ft, {} triangles, {:.2} sq ft",
        roof.profile.ridge,
        roof.profile.extrusion_end,
        roof.profile.extrusion_start,
        mesh.indices.len(),
        mesh.area(),
    );
    println!("committed: {:?}", doc.committed());
    Ok(())
}
