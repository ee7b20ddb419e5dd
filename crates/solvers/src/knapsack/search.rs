use lapidary_core::{Item, Observer};

use super::{Action, Budget, Config, Error, Event, Solution, Status, Table, ZeroCost};

/// Counts and value included at every spend level before any item is scanned.
struct Baseline {
    counts: Vec<u64>,
    value: f64,
}

/// Builds the baseline from zero-cost items according to the config.
fn baseline(items: &[Item], zero_cost: ZeroCost) -> Result<Baseline, Error> {
    let mut counts = vec![0; items.len()];
    let mut value = 0.0;

    for (index, item) in items.iter().enumerate() {
        if item.cost_units() != 0 || item.price() == 0.0 {
            continue;
        }
        match zero_cost {
            ZeroCost::Reject => return Err(Error::UnboundedItem { index }),
            ZeroCost::Cap(units) => {
                counts[index] = units;
                value += item.price() * units as f64;
            }
        }
    }

    if !value.is_finite() {
        return Err(Error::Overflow { level: 0 });
    }

    Ok(Baseline { counts, value })
}

/// Runs the spend-level recurrence and reports each finished level.
pub(super) fn search<Obs>(
    items: &[Item],
    budget: Budget,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let levels = budget.levels().ok_or(Error::TableTooLarge {
        cells: usize::MAX,
        limit: config.max_cells(),
    })?;
    let cells = levels
        .checked_mul(items.len().max(1))
        .unwrap_or(usize::MAX);
    if cells > config.max_cells() {
        return Err(Error::TableTooLarge {
            cells,
            limit: config.max_cells(),
        });
    }

    let base = baseline(items, config.zero_cost())?;
    let mut table = Table::with_capacity(items.len(), levels);

    for level in 0..levels {
        table.push(base.value, &base.counts);
        let mut updated_by = None;

        for (index, item) in items.iter().enumerate() {
            let cost = item.cost_units();
            if cost == 0 || cost > level {
                continue;
            }

            let from = level - cost;
            let candidate = table.value_at(from) + item.price();
            if !candidate.is_finite() {
                return Err(Error::Overflow { level });
            }

            if candidate >= table.value_at(level) {
                table
                    .extend_from(from, level, index, candidate)
                    .ok_or(Error::Overflow { level })?;
                updated_by = Some(index);
            }
        }

        let event = Event {
            level,
            value: table.value_at(level),
            counts: table.row(level),
            updated_by,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                table,
            });
        }
    }

    Ok(Solution {
        status: Status::Complete,
        table,
    })
}
