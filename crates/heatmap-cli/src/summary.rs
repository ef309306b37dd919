use std::path::Path;

use console::Style;
use heatmap_core::color::{occupancy_to_color, to_hex};
use heatmap_core::room::Dataset;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    empty: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            empty: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_dataset_summary(path: &Path, dataset: &Dataset) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Occupancy Dataset"));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("File"),
        s.path.apply_to(path.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Records"),
        s.value.apply_to(dataset.len())
    );
    if let Some((lo, hi)) = dataset.occupancy_range() {
        println!(
            "  {:<14}{} - {}",
            s.label.apply_to("Occupancy"),
            s.value.apply_to(lo),
            s.value.apply_to(hi)
        );
    }
    println!();

    for (hour, count) in dataset.hour_counts().iter().enumerate() {
        let label = format!("{hour:02}:00");
        if *count == 0 {
            println!(
                "    {:<10}{}",
                s.label.apply_to(label),
                s.empty.apply_to("no rooms")
            );
            continue;
        }
        let peak = dataset
            .rooms_at(hour as u8)
            .map(|(_, r)| r.occupancy)
            .fold(0.0_f64, f64::max);
        println!(
            "    {:<10}{} rooms, peak {} ({})",
            s.label.apply_to(label),
            s.value.apply_to(count),
            s.value.apply_to(peak),
            to_hex(occupancy_to_color(peak))
        );
    }
    println!();
}
