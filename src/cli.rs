use clap::{Args as ClapArgs, Parser, Subcommand};
use pc_builder::application::dto::{BrowseRequest, BuildCommand, OutputFormat};
use pc_builder::catalog::domain::{Category, FilterCriteria};
use pc_builder::catalog::services::{PageRequest, SortOrder};
use std::path::PathBuf;
use std::str::FromStr;

/// Browse PC component catalogs and assemble a build
#[derive(Parser, Debug)]
#[command(name = "pc-builder")]
#[command(version)]
#[command(about = "Browse PC component catalogs and assemble a build", long_about = None)]
pub struct Args {
    /// Directory holding one catalog file per category [default: catalog]
    #[arg(long, global = true, value_name = "DIR")]
    pub catalog_dir: Option<PathBuf>,

    /// Base URL of a catalog server; the catalog directory is used when it is unreachable
    #[arg(long, global = true, value_name = "URL")]
    pub catalog_url: Option<String>,

    /// File the current build is saved in [default: .pc-build.json]
    #[arg(long, global = true, value_name = "FILE")]
    pub build_file: Option<PathBuf>,

    /// Path to config file (default: auto-discover pc-builder.config.yml in current directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format: markdown or json [default: markdown]
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List one page of a category's catalog, filtered and sorted
    List(ListArgs),

    /// Show the filterable fields of a category with their value ranges and options
    Facets {
        category: Category,
    },

    /// Put a component into the build, replacing the current one of its category
    Add {
        category: Category,
        id: String,
    },

    /// Remove the component of a category from the build
    Remove {
        category: Category,
    },

    /// Remove every component from the build
    Clear,

    /// Show the build with its total price and compatibility notes
    Show {
        /// Exit with code 1 if the build has compatibility notes
        #[arg(long)]
        strict: bool,
    },

    /// Reload every selected component from its current catalog
    Refresh,

    /// Compare components of one category side by side
    Compare {
        category: Category,

        /// Component ids, at least two
        #[arg(required = true, num_args = 2..)]
        ids: Vec<String>,
    },
}

impl Command {
    /// The build command this subcommand maps to, if it works on the build
    pub fn build_command(&self) -> Option<BuildCommand> {
        match self {
            Command::Add { category, id } => Some(BuildCommand::Add {
                category: *category,
                id: id.clone(),
            }),
            Command::Remove { category } => Some(BuildCommand::Remove {
                category: *category,
            }),
            Command::Clear => Some(BuildCommand::Clear),
            Command::Show { .. } => Some(BuildCommand::Show),
            Command::Refresh => Some(BuildCommand::Refresh),
            Command::List(_) | Command::Facets { .. } | Command::Compare { .. } => None,
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct ListArgs {
    pub category: Category,

    /// Case-insensitive text matched against name and brand
    #[arg(short, long)]
    pub search: Option<String>,

    #[arg(long, value_name = "AMOUNT", value_parser = parse_amount)]
    pub min_price: Option<f64>,

    #[arg(long, value_name = "AMOUNT", value_parser = parse_amount)]
    pub max_price: Option<f64>,

    /// Only these brands; repeat for several
    #[arg(short, long, value_name = "BRAND")]
    pub brand: Vec<String>,

    /// Numeric range: field=min..max, field=min.. or field=..max
    #[arg(long, value_name = "FIELD=RANGE")]
    pub range: Vec<RangeFilter>,

    /// Categorical value: field=value; repeat to accept several values
    #[arg(long, value_name = "FIELD=VALUE")]
    pub select: Vec<SelectFilter>,

    /// Yes/no attribute: field=yes or field=no
    #[arg(long, value_name = "FIELD=yes|no")]
    pub flag: Vec<FlagFilter>,

    /// featured, price-asc, price-desc or name
    #[arg(long, default_value = "featured")]
    pub sort: SortOrder,

    #[arg(short, long, default_value_t = 1, value_parser = parse_positive)]
    pub page: usize,

    /// Results per page (default: config page_size, then 20)
    #[arg(long, value_parser = parse_positive)]
    pub page_size: Option<usize>,
}

impl ListArgs {
    pub fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        if let Some(search) = &self.search {
            criteria.set_search(search.as_str());
        }
        criteria.set_range("price", self.min_price, self.max_price);
        for brand in &self.brand {
            criteria.select("brand", brand.as_str());
        }
        for range in &self.range {
            criteria.set_range(&range.field, range.min, range.max);
        }
        for select in &self.select {
            criteria.select(&select.field, select.value.as_str());
        }
        for flag in &self.flag {
            criteria.set_flag(&flag.field, Some(flag.value));
        }
        criteria
    }

    pub fn to_request(&self, default_page_size: usize) -> BrowseRequest {
        let page_size = self.page_size.unwrap_or(default_page_size);
        BrowseRequest::new(self.category)
            .with_criteria(self.criteria())
            .with_sort(self.sort)
            .with_page(PageRequest::new(self.page, page_size))
    }
}

/// `field=min..max` with either bound optional
#[derive(Debug, Clone, PartialEq)]
pub struct RangeFilter {
    pub field: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FromStr for RangeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, range) = split_assignment(s)?;
        let Some((min, max)) = range.split_once("..") else {
            return Err(format!(
                "Invalid range '{}'. Expected field=min..max, field=min.. or field=..max",
                s
            ));
        };
        let min = parse_bound(min)?;
        let max = parse_bound(max)?;
        if min.is_none() && max.is_none() {
            return Err(format!("Range '{}' needs at least one bound", s));
        }
        Ok(Self { field, min, max })
    }
}

/// `field=value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectFilter {
    pub field: String,
    pub value: String,
}

impl FromStr for SelectFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = split_assignment(s)?;
        if value.is_empty() {
            return Err(format!("Missing value in '{}'", s));
        }
        Ok(Self {
            field,
            value: value.to_string(),
        })
    }
}

/// `field=yes|no`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagFilter {
    pub field: String,
    pub value: bool,
}

impl FromStr for FlagFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = split_assignment(s)?;
        let value = match value.to_lowercase().as_str() {
            "yes" | "true" | "y" => true,
            "no" | "false" | "n" => false,
            _ => return Err(format!("Invalid flag '{}'. Expected field=yes or field=no", s)),
        };
        Ok(Self { field, value })
    }
}

fn split_assignment(s: &str) -> Result<(String, &str), String> {
    match s.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => {
            Ok((field.trim().to_string(), value.trim()))
        }
        _ => Err(format!("Invalid filter '{}'. Expected field=value", s)),
    }
}

fn parse_bound(s: &str) -> Result<Option<f64>, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    parse_amount(s).map(Some)
}

fn parse_amount(s: &str) -> Result<f64, String> {
    match s.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(format!("'{}' is not a finite number", s.trim())),
    }
}

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a positive number", s)),
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
