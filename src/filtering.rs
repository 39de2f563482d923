//! Result ordering.
//!
//! Results come out of the scanner in enumeration order. This module applies
//! the optional `--sort` criterion before they are printed.

use crate::{
    config::{OutputOptions, SortCriteria},
    result::SizeResult,
};

/// Sort results in place according to the output options.
///
/// When `opts.sort` is `None`, the list is left in its current order.
/// Each criterion has a natural default direction:
/// - `Size`: largest first (descending)
/// - `Name`: alphabetical, case-insensitive (ascending)
///
/// Setting `opts.reverse` to `true` flips the resulting order. Both sorts are
/// stable, so ties keep their enumeration order.
pub fn sort_results(results: &mut [SizeResult], opts: &OutputOptions) {
    let Some(criteria) = opts.sort else {
        return;
    };

    match criteria {
        SortCriteria::Size => {
            results.sort_by(|a, b| b.size.cmp(&a.size));
        }
        SortCriteria::Name => {
            results.sort_by_cached_key(|r| r.name().to_lowercase());
        }
    }

    if opts.reverse {
        results.reverse();
    }
}
