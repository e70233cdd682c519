//! The dashboard itself: sections, column selections and chart styling
//!
//! Every chart takes its categories from the table index, so bars appear in
//! the row order of the metrics file.

use super::layout::{Page, Pane, Tab};
use super::reference::ReferenceSeries;
use crate::chart::{make_pie, BarSpec, Figure, PieSpec};
use crate::error::Result;
use crate::metrics::{MetricsTable, Series};

pub const DEFAULT_TITLE: &str = "Life Insurance Industry Dashboard";

pub const FIRST_YEAR_PREMIUMS: &str = "First Year Premiums";
pub const GROSS_CONTRACT_LIABILITIES: &str = "Gross Insurance Contract Liabilities";
pub const CATASTROPHIC_RESERVES: &str = "Catastrophic Reserves";
pub const ASSET: &str = "Asset";
pub const LIABILITY: &str = "Liability";
pub const PAID_UP_CAPITAL: &str = "Paid-up Capital";
pub const NET_PROFIT: &str = "Net Profit";
pub const GROSS_EARNED_PREMIUMS: &str = "Gross Earned Premiums";
pub const NET_CLAIMS: &str = "Net Claims and Benefits Paid";
pub const OPERATING_EXPENSE: &str = "Operating Expense";
pub const OFFICES: &str = "Offices";
pub const AGENTS: &str = "Agents";
pub const EMPLOYEES: &str = "Employees";

const COMPANY_AXIS: &str = "Company Acronym";
const GROWTH_AXIS: &str = "Growth Rate (in %)";

/// Build the full dashboard page from a loaded table.
///
/// Any missing column, zero denominator or company absent from a
/// reference series aborts the whole page.
pub fn build_dashboard(table: &MetricsTable, reference: &ReferenceSeries, title: &str) -> Result<Page> {
    log::info!("Building dashboard for {} companies", table.len());

    let dashboard = Tab::new("Dashboard")
        .header("DASHBOARD")
        .row(market_and_balance_sheet(table, reference)?)
        .row(capital_and_profitability(table)?)
        .row(business_and_expense(table)?)
        .row(growth_and_solvency(table, reference)?)
        .row(reach_and_workforce(table)?);

    let analysis = Tab::new("Analysis").header("ANALYSIS");

    let page = Page::new(title).wide().tab(dashboard).tab(analysis);
    log::info!("Dashboard has {} charts", page.chart_count());
    Ok(page)
}

fn bar(series: Series, title: &str) -> BarSpec {
    log::debug!("Chart '{}' from {}", title, series.name());
    BarSpec::from_series(series).title(title)
}

/// Vertical bar with companies along the bottom
fn column_chart(series: Series, title: &str, y_label: &str, color: &str) -> Result<Figure> {
    bar(series, title)
        .x_label(COMPANY_AXIS)
        .y_label(y_label)
        .color(color)
        .build()
}

/// Horizontal bar with companies down the side
fn row_chart(series: Series, title: &str, x_label: &str, color: &str) -> Result<Figure> {
    bar(series, title)
        .horizontal()
        .x_label(x_label)
        .y_label(COMPANY_AXIS)
        .color(color)
        .build()
}

fn market_and_balance_sheet(table: &MetricsTable, reference: &ReferenceSeries) -> Result<Vec<Pane>> {
    log::debug!("Section: market and size / asset and liabilities");

    let premiums = table.series(FIRST_YEAR_PREMIUMS)?;
    let pull = reference.market_share_pull.align_or(table.index(), 0.0);
    let (labels, values) = premiums.into_parts();
    let market_share = make_pie(
        &PieSpec::new(labels, values)
            .title("Market Share of Life Insurance Companies")
            .pull(pull),
    )?;

    let liabilities = row_chart(
        table.series(GROSS_CONTRACT_LIABILITIES)?,
        "Gross Insurance Contract Liabilities",
        "Amount (in Rs.)",
        "#F8BB5A",
    )?;

    let catastrophic_reserves_ratio = row_chart(
        table.ratio(CATASTROPHIC_RESERVES, GROSS_CONTRACT_LIABILITIES)?,
        "Catastrophic Reserves Ratio",
        "Catastrophic Reserves / Gross Insurance Contract Liabilities",
        "#5AE2F8",
    )?;

    let asset_liability_ratio = column_chart(
        table.ratio(ASSET, LIABILITY)?,
        "Asset Liability Ratio",
        "Total Assets / Total Liabilities",
        "#F8E75A",
    )?;

    Ok(vec![
        Pane::new(1).callout("MARKET AND SIZE").wide_chart(market_share),
        Pane::new(3).callout("ASSET AND LIABILITIES").row(vec![
            Pane::new(1).chart(liabilities),
            Pane::new(1).chart(catastrophic_reserves_ratio),
            Pane::new(1).chart(asset_liability_ratio),
        ]),
    ])
}

fn capital_and_profitability(table: &MetricsTable) -> Result<Vec<Pane>> {
    log::debug!("Section: paid-up capital / profitability");

    let paid_up_capital = column_chart(
        table.series(PAID_UP_CAPITAL)?,
        "Paid Up Capital of Life Insurance Companies",
        "Paid Up Capital",
        "#8BF85A",
    )?;

    let profit_margin = column_chart(
        table.ratio(NET_PROFIT, GROSS_EARNED_PREMIUMS)?,
        "Profit Margin",
        "",
        "#F8F85A",
    )?;

    let net_profit = row_chart(table.series(NET_PROFIT)?, "Net Profit", "Amount (in NPR)", "#5A6EF8")?;

    Ok(vec![
        Pane::new(1).wide_chart(paid_up_capital),
        Pane::new(3).callout("PROFITABILITY").row(vec![
            Pane::new(1).chart(profit_margin),
            Pane::new(1).chart(net_profit),
        ]),
    ])
}

fn business_and_expense(table: &MetricsTable) -> Result<Vec<Pane>> {
    log::debug!("Section: business / expense");

    let gross_earned_premiums = row_chart(
        table.series(GROSS_EARNED_PREMIUMS)?,
        "Gross Earned Premiums",
        "Earned Premiums (in NPR)",
        "#C65AF8",
    )?;

    let claim_expense_ratio = column_chart(
        table.ratio(NET_CLAIMS, GROSS_EARNED_PREMIUMS)?,
        "Claim Expense Ratio",
        "Claim Expense Ratio",
        "#5AF8D1",
    )?;

    let expense_ratio = column_chart(
        table.ratio(OPERATING_EXPENSE, GROSS_EARNED_PREMIUMS)?,
        "Expense Ratio",
        "",
        "#F8AA5A",
    )?;

    Ok(vec![
        Pane::new(1).callout("BUSINESS").wide_chart(gross_earned_premiums),
        Pane::new(3).callout("EXPENSE").row(vec![
            Pane::new(1).wide_chart(claim_expense_ratio),
            Pane::new(1).wide_chart(expense_ratio),
        ]),
    ])
}

fn growth_and_solvency(table: &MetricsTable, reference: &ReferenceSeries) -> Result<Vec<Pane>> {
    log::debug!("Section: growth / solvency");

    let first_year_growth = column_chart(
        reference.first_year_premium_growth.align(table.index())?,
        "First Year Premium Growth Rate",
        GROWTH_AXIS,
        "#DC5AF8",
    )?;

    let gross_growth = column_chart(
        reference.gross_premium_growth.align(table.index())?,
        "Gross Premium Growth Rate",
        GROWTH_AXIS,
        "#F85ACC",
    )?;

    let solvency_margin = column_chart(
        reference.solvency_margin.align(table.index())?,
        "Solvency Margin",
        "Solvency Margin (in %)",
        "#BC6DFF",
    )?;

    Ok(vec![
        Pane::new(2).callout("GROWTH").row(vec![
            Pane::new(1).chart(first_year_growth),
            Pane::new(1).wide_chart(gross_growth),
        ]),
        Pane::new(1).callout("SOLVENCY").wide_chart(solvency_margin),
    ])
}

fn reach_and_workforce(table: &MetricsTable) -> Result<Vec<Pane>> {
    log::debug!("Section: reach / workforce");

    let branches = row_chart(table.series(OFFICES)?, "Number of Branches", "", "#F8A55A")?;
    let agents = row_chart(table.series(AGENTS)?, "Number of Agents", "", "#F8C05A")?;
    let employees = row_chart(table.series(EMPLOYEES)?, "Number of Employees", "", "#5AF8B5")?;

    Ok(vec![
        Pane::new(2).callout("REACH").row(vec![
            Pane::new(1).wide_chart(branches),
            Pane::new(1).wide_chart(agents),
        ]),
        Pane::new(1).callout("WORKFORCE").wide_chart(employees),
    ])
}
