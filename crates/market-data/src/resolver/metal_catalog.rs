//! Tracked metals and steel/iron indices.
//!
//! Display names are what the dashboard sends; symbols are Yahoo Finance
//! tickers. Base metals without a usable continuous future are tracked
//! through WisdomTree ETF proxies on the LSE.

/// A tracked series shown on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub symbol: &'static str,
    pub group: CatalogGroup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogGroup {
    /// Selectable as the metal leg of a correlation analysis.
    Metal,
    /// Shown on the dashboard only.
    SteelIndex,
}

const fn metal(name: &'static str, symbol: &'static str) -> CatalogEntry {
    CatalogEntry {
        name,
        symbol,
        group: CatalogGroup::Metal,
    }
}

const fn steel(name: &'static str, symbol: &'static str) -> CatalogEntry {
    CatalogEntry {
        name,
        symbol,
        group: CatalogGroup::SteelIndex,
    }
}

pub const METAL_CATALOG: &[CatalogEntry] = &[
    metal("Gold", "GC=F"),
    metal("Silver", "SI=F"),
    metal("Copper", "HG=F"),
    metal("Platinum", "PL=F"),
    metal("Palladium", "PA=F"),
    metal("Aluminium", "ALI=F"),
    // ETF proxies: nickel futures are unavailable, ZNC=F is frozen
    metal("Nickel", "NICK.L"),
    metal("Zinc", "ZINC.L"),
    metal("Lead", "LEED.L"),
    metal("Tin", "TIN.L"),
    // HRC futures settle to the CRU index
    steel("CRU Index", "HRC=F"),
    steel("DJUSST", "^DJUSST"),
    steel("HRC Futures", "HRC=F"),
    steel("SGX Iron Ore", "TIO=F"),
];

/// Look up a metal by display name. Steel indices are not analyzable metals.
pub fn metal_symbol(name: &str) -> Option<&'static str> {
    METAL_CATALOG
        .iter()
        .find(|entry| entry.group == CatalogGroup::Metal && entry.name == name)
        .map(|entry| entry.symbol)
}

/// Every entry shown on the metals dashboard, in catalog order.
pub fn dashboard_entries() -> impl Iterator<Item = &'static CatalogEntry> {
    METAL_CATALOG.iter()
}
