use std::io::Write;

use courtside_core::context::AppConfigExt;
use courtside_core::views::{self, SelectionError};
use courtside_types::{BoxScoreStat, LineStat, PlayoffTier};

use crate::context::CliContext;

pub fn show_config(ctx: &CliContext) -> Result<(), String> {
    println!("data directory: {}", ctx.config.data_directory);
    println!("  advanced:     {}", ctx.config.datasets.advanced);
    println!("  line series:  {}", ctx.config.datasets.line_series);
    println!("  box scores:   {}", ctx.config.datasets.box_score);
    println!("  team lookup:  {}", ctx.config.datasets.team_lookup);
    Ok(())
}

pub async fn set_directory(path: &str, ctx: &mut CliContext) -> Result<(), String> {
    ctx.config.data_directory = path.to_string();
    ctx.config.clone().save().map_err(|e| e.to_string())?;
    ctx.reload_tables().await.map_err(|e| e.to_string())?;
    println!("data directory set to {path}");
    render(ctx)
}

pub fn list_tiers(ctx: &CliContext) -> Result<(), String> {
    for tier in ctx.tables.tier_inventory() {
        println!("{} - {}", tier.value(), tier.label());
    }
    Ok(())
}

pub fn list_teams(ctx: &CliContext) -> Result<(), String> {
    let labels = ctx.tables.label_inventory();
    for label in &labels {
        println!("{label}");
    }
    println!("\nTotal: {} team-seasons", labels.len());
    Ok(())
}

pub fn list_stats() -> Result<(), String> {
    println!("line chart statistics:");
    for stat in LineStat::SELECTOR {
        println!("  {:<10} {}", stat.column(), stat.display_name());
    }
    println!("3D scatter statistics:");
    for stat in BoxScoreStat::ALL {
        println!("  {}", stat.as_str());
    }
    Ok(())
}

pub fn set_tiers(values: &[i64], ctx: &mut CliContext) -> Result<(), String> {
    let mut tiers = Vec::with_capacity(values.len());
    for value in values {
        let tier = PlayoffTier::from_value(*value)
            .ok_or_else(|| SelectionError::UnknownTier { value: *value }.to_string())?;
        tiers.push(tier);
    }
    ctx.selection.tiers = tiers;
    render(ctx)
}

pub fn set_teams(labels: &[String], ctx: &mut CliContext) -> Result<(), String> {
    let inventory = ctx.tables.label_inventory();
    for label in labels {
        if !inventory.contains(label) {
            return Err(format!("unknown team-season label '{label}'"));
        }
    }
    ctx.selection.team_labels = labels.to_vec();
    render(ctx)
}

pub fn set_all_teams(on: bool, ctx: &mut CliContext) -> Result<(), String> {
    ctx.selection.select_all_teams = on;
    // The checkbox governs the default, not an explicit selection.
    ctx.selection.team_labels.clear();
    render(ctx)
}

pub fn set_stat(name: &str, ctx: &mut CliContext) -> Result<(), String> {
    let stat = LineStat::from_column(name).ok_or_else(|| {
        SelectionError::UnknownStat {
            name: name.to_string(),
        }
        .to_string()
    })?;
    ctx.selection.line_stat = stat;
    render(ctx)
}

pub fn set_dims(names: &[String], ctx: &mut CliContext) -> Result<(), String> {
    let mut stats = Vec::with_capacity(names.len());
    for name in names {
        let stat = BoxScoreStat::from_column(name).ok_or_else(|| {
            SelectionError::UnknownStat {
                name: name.clone(),
            }
            .to_string()
        })?;
        stats.push(stat);
    }
    // An off count is set anyway: the render reports it inline next to
    // the 3D view, exactly like the dashboard does.
    ctx.selection.scatter_stats = stats;
    render(ctx)
}

pub fn render(ctx: &CliContext) -> Result<(), String> {
    let view = views::render(&ctx.tables, &ctx.selection);

    println!(
        "parallel coordinates: {} team-season rows ({})",
        view.parallel.color_values.len(),
        view.parallel.title
    );
    let series: Vec<String> = view
        .line
        .series
        .iter()
        .map(|s| format!("{} ({} pts)", s.result.as_str(), s.points.len()))
        .collect();
    println!(
        "line chart: {} | y [{}, {}] | {}",
        view.line.title,
        view.line.y_domain.min,
        view.line.y_domain.max,
        series.join(", ")
    );
    match &view.scatter {
        Ok(scatter) => println!(
            "3d scatter: {} points [{} x {} x {}]",
            scatter.points.len(),
            scatter.axes[0],
            scatter.axes[1],
            scatter.axes[2]
        ),
        Err(err) => println!("3d scatter: not rendered - {err}"),
    }
    Ok(())
}

pub fn export(view: &str, ctx: &CliContext) -> Result<(), String> {
    let rendered = views::render(&ctx.tables, &ctx.selection);
    let json = match view {
        "parallel" => serde_json::to_string_pretty(&rendered.parallel),
        "line" => serde_json::to_string_pretty(&rendered.line),
        "scatter" => {
            let scatter = rendered.scatter.map_err(|e| e.to_string())?;
            serde_json::to_string_pretty(&scatter)
        }
        other => return Err(format!("unknown view '{other}' (parallel | line | scatter)")),
    };
    println!("{}", json.map_err(|e| e.to_string())?);
    Ok(())
}

pub fn exit() {
    write!(std::io::stdout(), "quitting...").ok();
    std::io::stdout().flush().ok();
}
