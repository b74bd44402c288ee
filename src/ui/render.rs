//! Console rendering for the analytics reports.
//!
//! Presentation only: every number comes from the aggregator / assembler,
//! nothing is re-derived here. Undefined metrics render as "n/a", never 0.

use crate::models::reports::{
    AdoptionTrendReport, EmployeeDashboard, ExecutiveSummary, ToolRoiReport,
};
use crate::utils::colors::{CYAN, GREY, RESET, color_for_roi};
use crate::utils::date::month_name;
use crate::utils::formatting::{fmt_money, fmt_opt_percent, fmt_opt_quality};
use crate::utils::table::{Column, Table};

fn col(header: &str, width: usize) -> Column {
    Column {
        header: header.to_string(),
        width,
    }
}

fn roi_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}{:.2}%{}", color_for_roi(v), v, RESET),
        None => format!("{GREY}n/a{RESET}"),
    }
}

pub fn render_tool_roi(report: &ToolRoiReport) {
    println!(
        "\n💰 ROI · {} · {} {}\n",
        report.department,
        month_name(report.month),
        report.year
    );

    let mut table = Table::new(vec![
        col("TOOL", 20),
        col("COST/MO", 10),
        col("USES", 6),
        col("HOURS SAVED", 12),
        col("VALUE", 12),
        col("QUALITY", 8),
        col("ROI", 12),
    ]);

    for row in &report.tools {
        table.add_row(vec![
            row.tool.clone(),
            fmt_money(row.monthly_cost),
            row.total_uses.to_string(),
            format!("{:.2}", row.hours_saved),
            fmt_money(row.value_of_time_saved),
            fmt_opt_quality(row.avg_quality),
            roi_cell(row.roi_percent),
        ]);
    }

    println!("{}", table.render());
    println!(
        "{}Department ROI (mean across tools):{} {}",
        CYAN,
        RESET,
        roi_cell(report.roi_total)
    );
}

pub fn render_dashboard(d: &EmployeeDashboard) {
    println!("\n📊 PRODUCTIVITY DASHBOARD · {}", d.name);
    println!(
        "{}{} · {} · {}{}",
        GREY, d.department, d.role, d.seniority, RESET
    );
    println!("Window: last {} days (since {})\n", d.window_days, d.since);

    println!("  • Tools used:       {}", d.tools_used);
    println!("  • Hours saved:      {:.2}", d.hours_saved);
    println!("  • Average quality:  {}", fmt_opt_quality(d.avg_quality));
    println!("  • Efficiency score: {:.0}/100", d.efficiency_score);

    if !d.tools.is_empty() {
        println!();
        let mut table = Table::new(vec![
            col("TOOL", 20),
            col("USES", 6),
            col("MIN USED", 10),
            col("MIN SAVED", 10),
            col("QUALITY", 8),
        ]);

        for row in &d.tools {
            table.add_row(vec![
                row.tool.clone(),
                row.uses.to_string(),
                row.minutes_used.to_string(),
                row.minutes_saved.to_string(),
                format!("{:.1}/5", row.avg_quality),
            ]);
        }

        println!("{}", table.render());
    }
}

pub fn render_adoption_trends(report: &AdoptionTrendReport) {
    println!("\n📈 AI ADOPTION TRENDS\n");

    println!("Monthly usage:");
    let mut monthly = Table::new(vec![
        col("MONTH", 9),
        col("USERS", 7),
        col("USES", 7),
        col("MIN SAVED", 10),
    ]);
    for row in &report.monthly {
        monthly.add_row(vec![
            row.month.clone(),
            row.distinct_users.to_string(),
            row.total_uses.to_string(),
            row.minutes_saved.to_string(),
        ]);
    }
    println!("{}", monthly.render());

    println!("Adoption by department:");
    let mut depts = Table::new(vec![
        col("DEPARTMENT", 14),
        col("AI USERS", 10),
        col("HEADCOUNT", 10),
        col("ADOPTION", 10),
        col("MIN SAVED", 10),
    ]);
    for row in &report.departments {
        depts.add_row(vec![
            row.department.clone(),
            row.ai_users.to_string(),
            row.headcount.to_string(),
            fmt_opt_percent(row.adoption_percent),
            row.minutes_saved.to_string(),
        ]);
    }
    println!("{}", depts.render());

    println!("Most used tools:");
    let mut tools = Table::new(vec![
        col("TOOL", 20),
        col("CATEGORY", 20),
        col("USERS", 7),
        col("USES", 7),
        col("QUALITY", 8),
    ]);
    for row in &report.tools {
        tools.add_row(vec![
            row.tool.clone(),
            row.category.clone(),
            row.distinct_users.to_string(),
            row.total_uses.to_string(),
            format!("{:.1}/5", row.avg_quality),
        ]);
    }
    println!("{}", tools.render());

    println!(
        "{}Global adoption:{} {} ({}/{} active employees)",
        CYAN,
        RESET,
        fmt_opt_percent(report.summary.adoption_percent),
        report.summary.ai_users,
        report.summary.active_employees,
    );
}

pub fn render_executive_summary(s: &ExecutiveSummary) {
    println!("\n{}", "=".repeat(60));
    println!("📊 EXECUTIVE REPORT: AI & PRODUCTIVITY");
    println!("{}", "=".repeat(60));

    println!("\n🎯 SUMMARY:");
    println!(
        "   • Global AI adoption: {}",
        fmt_opt_percent(s.adoption.adoption_percent)
    );
    println!(
        "   • Employees using AI: {}/{}",
        s.adoption.ai_users, s.adoption.active_employees
    );

    println!("\n📈 TOP DEPARTMENTS (AI adoption):");
    for (i, dept) in s.top_departments.iter().enumerate() {
        println!(
            "   {}. {}: {} ({}/{} employees)",
            i + 1,
            dept.department,
            fmt_opt_percent(dept.adoption_percent),
            dept.ai_users,
            dept.headcount
        );
    }

    println!("\n🛠️ MOST USED TOOLS:");
    for (i, tool) in s.top_tools.iter().enumerate() {
        println!("   {}. {} ({})", i + 1, tool.tool, tool.category);
        println!(
            "      Users: {} | Quality: {:.1}/5",
            tool.distinct_users, tool.avg_quality
        );
    }

    println!(
        "\n💰 ROI BY DEPARTMENT ({} {}):",
        month_name(s.month),
        s.year
    );
    for entry in &s.department_roi {
        match entry.roi_total {
            Some(v) => println!("   • {}: ROI {}", entry.department, roi_cell(Some(v))),
            None => println!("   • {}: {}no usage data{}", entry.department, GREY, RESET),
        }
    }
    println!();
}
