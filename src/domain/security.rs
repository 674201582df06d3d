//! Security catalogue: the fixed symbol set and per-security dividend terms.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::error::ValuationError;
use crate::ports::config_port::ConfigPort;

/// The fixed set of listed symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StockSymbol {
    Tea,
    Pop,
    Ale,
    Gin,
    Joe,
}

impl StockSymbol {
    pub const ALL: [StockSymbol; 5] = [
        StockSymbol::Tea,
        StockSymbol::Pop,
        StockSymbol::Ale,
        StockSymbol::Gin,
        StockSymbol::Joe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StockSymbol::Tea => "TEA",
            StockSymbol::Pop => "POP",
            StockSymbol::Ale => "ALE",
            StockSymbol::Gin => "GIN",
            StockSymbol::Joe => "JOE",
        }
    }
}

impl fmt::Display for StockSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockSymbol {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TEA" => Ok(StockSymbol::Tea),
            "POP" => Ok(StockSymbol::Pop),
            "ALE" => Ok(StockSymbol::Ale),
            "GIN" => Ok(StockSymbol::Gin),
            "JOE" => Ok(StockSymbol::Joe),
            other => Err(ValuationError::NotFound {
                symbol: other.to_string(),
            }),
        }
    }
}

/// A listed security and the terms its dividend is computed from.
///
/// Each class carries only the attributes its yield formula needs, so a
/// preferred security cannot exist without a fixed dividend or par value.
#[derive(Debug, Clone, PartialEq)]
pub enum Security {
    Common {
        symbol: StockSymbol,
        last_dividend: Decimal,
    },
    Preferred {
        symbol: StockSymbol,
        fixed_dividend: Decimal,
        par_value: i64,
    },
}

impl Security {
    pub fn symbol(&self) -> StockSymbol {
        match self {
            Security::Common { symbol, .. } | Security::Preferred { symbol, .. } => *symbol,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Security::Common { .. } => "COMMON",
            Security::Preferred { .. } => "PREFERRED",
        }
    }
}

/// Read-only security table, one entry per symbol. Built once, safe to
/// share across calculators without synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue {
    securities: BTreeMap<StockSymbol, Security>,
}

impl Catalogue {
    /// The reference listing.
    pub fn reference() -> Self {
        let securities = [
            Security::Common {
                symbol: StockSymbol::Tea,
                last_dividend: Decimal::ZERO,
            },
            Security::Common {
                symbol: StockSymbol::Pop,
                last_dividend: dec!(8),
            },
            Security::Common {
                symbol: StockSymbol::Ale,
                last_dividend: dec!(23),
            },
            Security::Preferred {
                symbol: StockSymbol::Gin,
                fixed_dividend: dec!(0.02),
                par_value: 100,
            },
            Security::Common {
                symbol: StockSymbol::Joe,
                last_dividend: dec!(13),
            },
        ]
        .into_iter()
        .map(|security| (security.symbol(), security))
        .collect();
        Catalogue { securities }
    }

    /// The reference listing with per-symbol attribute overrides read from
    /// `[security.SYM]` config sections. Membership is fixed: overrides may
    /// change a security's class or terms, never add or remove symbols.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, ValuationError> {
        let mut catalogue = Catalogue::reference();
        for symbol in StockSymbol::ALL {
            let section = format!("security.{symbol}");
            let Some(class) = config.get_string(&section, "class") else {
                continue;
            };
            let security = match class.trim().to_uppercase().as_str() {
                "COMMON" => {
                    let last_dividend = attr_decimal(config, &section, "last_dividend")?
                        .ok_or(ValuationError::MissingAttribute {
                            symbol,
                            attribute: "last_dividend",
                        })?;
                    if last_dividend < Decimal::ZERO {
                        return Err(invalid_attr(&section, "last_dividend", "must not be negative"));
                    }
                    Security::Common {
                        symbol,
                        last_dividend,
                    }
                }
                "PREFERRED" => {
                    let fixed_dividend = attr_decimal(config, &section, "fixed_dividend")?
                        .ok_or(ValuationError::MissingAttribute {
                            symbol,
                            attribute: "fixed_dividend",
                        })?;
                    if fixed_dividend < Decimal::ZERO || fixed_dividend > Decimal::ONE {
                        return Err(invalid_attr(
                            &section,
                            "fixed_dividend",
                            "must be a ratio between 0 and 1",
                        ));
                    }
                    let par_value = attr_int(config, &section, "par_value")?.ok_or(
                        ValuationError::MissingAttribute {
                            symbol,
                            attribute: "par_value",
                        },
                    )?;
                    if par_value < 0 {
                        return Err(invalid_attr(&section, "par_value", "must not be negative"));
                    }
                    Security::Preferred {
                        symbol,
                        fixed_dividend,
                        par_value,
                    }
                }
                other => {
                    return Err(ValuationError::ConfigInvalid {
                        section,
                        key: "class".into(),
                        reason: format!("unknown security class {other}"),
                    });
                }
            };
            catalogue.securities.insert(symbol, security);
        }
        Ok(catalogue)
    }

    pub fn get(&self, symbol: StockSymbol) -> Result<&Security, ValuationError> {
        self.securities
            .get(&symbol)
            .ok_or_else(|| ValuationError::NotFound {
                symbol: symbol.to_string(),
            })
    }

    /// Securities in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = &Security> {
        self.securities.values()
    }
}

fn attr_decimal(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<Option<Decimal>, ValuationError> {
    match config.get_string(section, key) {
        None => Ok(None),
        Some(raw) => Decimal::from_str(raw.trim())
            .map(Some)
            .map_err(|e| invalid_attr(section, key, &e.to_string())),
    }
}

fn attr_int(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<Option<i64>, ValuationError> {
    match config.get_string(section, key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|e| invalid_attr(section, key, &e.to_string())),
    }
}

fn invalid_attr(section: &str, key: &str, reason: &str) -> ValuationError {
    ValuationError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    #[test]
    fn symbol_display_round_trips() {
        for symbol in StockSymbol::ALL {
            let parsed: StockSymbol = symbol.as_str().parse().unwrap();
            assert_eq!(parsed, symbol);
        }
    }

    #[test]
    fn symbol_parse_is_case_insensitive() {
        assert_eq!("tea".parse::<StockSymbol>().unwrap(), StockSymbol::Tea);
        assert_eq!(" Gin ".parse::<StockSymbol>().unwrap(), StockSymbol::Gin);
    }

    #[test]
    fn symbol_parse_rejects_unknown() {
        let err = "BHP".parse::<StockSymbol>().unwrap_err();
        assert!(matches!(err, ValuationError::NotFound { symbol } if symbol == "BHP"));
    }

    #[test]
    fn reference_catalogue_has_one_security_per_symbol() {
        let catalogue = Catalogue::reference();
        assert_eq!(catalogue.iter().count(), 5);
        for symbol in StockSymbol::ALL {
            assert_eq!(catalogue.get(symbol).unwrap().symbol(), symbol);
        }
    }

    #[test]
    fn reference_catalogue_terms() {
        let catalogue = Catalogue::reference();
        assert_eq!(
            catalogue.get(StockSymbol::Tea).unwrap(),
            &Security::Common {
                symbol: StockSymbol::Tea,
                last_dividend: Decimal::ZERO,
            }
        );
        assert_eq!(
            catalogue.get(StockSymbol::Ale).unwrap(),
            &Security::Common {
                symbol: StockSymbol::Ale,
                last_dividend: dec!(23),
            }
        );
        assert_eq!(
            catalogue.get(StockSymbol::Gin).unwrap(),
            &Security::Preferred {
                symbol: StockSymbol::Gin,
                fixed_dividend: dec!(0.02),
                par_value: 100,
            }
        );
    }

    #[test]
    fn from_config_without_overrides_matches_reference() {
        let config = FileConfigAdapter::empty();
        let catalogue = Catalogue::from_config(&config).unwrap();
        assert_eq!(catalogue, Catalogue::reference());
    }

    #[test]
    fn from_config_overrides_attributes() {
        let config = FileConfigAdapter::from_string(
            "[security.POP]\nclass = preferred\nfixed_dividend = 0.05\npar_value = 250\n",
        )
        .unwrap();
        let catalogue = Catalogue::from_config(&config).unwrap();
        assert_eq!(
            catalogue.get(StockSymbol::Pop).unwrap(),
            &Security::Preferred {
                symbol: StockSymbol::Pop,
                fixed_dividend: dec!(0.05),
                par_value: 250,
            }
        );
        // untouched symbols keep their reference terms
        assert_eq!(
            catalogue.get(StockSymbol::Ale).unwrap(),
            Catalogue::reference().get(StockSymbol::Ale).unwrap()
        );
    }

    #[test]
    fn from_config_rejects_incomplete_common() {
        let config = FileConfigAdapter::from_string("[security.TEA]\nclass = common\n").unwrap();
        let err = Catalogue::from_config(&config).unwrap_err();
        assert!(matches!(
            err,
            ValuationError::MissingAttribute {
                symbol: StockSymbol::Tea,
                attribute: "last_dividend",
            }
        ));
    }

    #[test]
    fn from_config_rejects_incomplete_preferred() {
        let config = FileConfigAdapter::from_string(
            "[security.GIN]\nclass = preferred\nfixed_dividend = 0.02\n",
        )
        .unwrap();
        let err = Catalogue::from_config(&config).unwrap_err();
        assert!(matches!(
            err,
            ValuationError::MissingAttribute {
                symbol: StockSymbol::Gin,
                attribute: "par_value",
            }
        ));
    }

    #[test]
    fn from_config_rejects_unknown_class() {
        let config =
            FileConfigAdapter::from_string("[security.JOE]\nclass = convertible\n").unwrap();
        let err = Catalogue::from_config(&config).unwrap_err();
        assert!(matches!(err, ValuationError::ConfigInvalid { key, .. } if key == "class"));
    }

    #[test]
    fn from_config_rejects_malformed_attribute() {
        let config = FileConfigAdapter::from_string(
            "[security.TEA]\nclass = common\nlast_dividend = lots\n",
        )
        .unwrap();
        let err = Catalogue::from_config(&config).unwrap_err();
        assert!(matches!(err, ValuationError::ConfigInvalid { key, .. } if key == "last_dividend"));
    }

    #[test]
    fn from_config_rejects_out_of_range_fixed_dividend() {
        let config = FileConfigAdapter::from_string(
            "[security.GIN]\nclass = preferred\nfixed_dividend = 1.5\npar_value = 100\n",
        )
        .unwrap();
        let err = Catalogue::from_config(&config).unwrap_err();
        assert!(matches!(err, ValuationError::ConfigInvalid { key, .. } if key == "fixed_dividend"));
    }
}
