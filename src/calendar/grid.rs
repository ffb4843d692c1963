use crate::calendar::converter::{fixed_from_hijri, month_length, weekday_of_fixed};
use crate::models::cell::{CalendarCell, GRID_CELLS, MonthAnchor, MonthGrid};

/// Build the 6x7 month view for `anchor`, padded with the tail of the
/// previous month and the head of the next one.
pub fn generate_grid(anchor: MonthAnchor) -> MonthGrid {
    let days_in_month = month_length(anchor.year, anchor.month);
    let first_weekday = weekday_of_fixed(fixed_from_hijri(anchor.year, anchor.month, 1));

    // Unsaturated neighbours: spillover for 1 AH still shows year 0 day numbers.
    let (prev_year, prev_month) = match anchor.month {
        1 => (anchor.year - 1, 12),
        m => (anchor.year, m - 1),
    };
    let (next_year, next_month) = match anchor.month {
        12 => (anchor.year + 1, 1),
        m => (anchor.year, m + 1),
    };
    let days_in_prev = month_length(prev_year, prev_month);

    let mut cells = Vec::with_capacity(GRID_CELLS);

    for date in (days_in_prev - first_weekday + 1)..=days_in_prev {
        cells.push(CalendarCell {
            date,
            month: prev_month,
            year: prev_year,
            is_current_month: false,
        });
    }

    for date in 1..=days_in_month {
        cells.push(CalendarCell {
            date,
            month: anchor.month,
            year: anchor.year,
            is_current_month: true,
        });
    }

    let mut date = 1;
    while cells.len() < GRID_CELLS {
        cells.push(CalendarCell {
            date,
            month: next_month,
            year: next_year,
            is_current_month: false,
        });
        date += 1;
    }

    MonthGrid {
        anchor,
        days_in_month,
        first_weekday,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::converter::weekday;
    use crate::models::hijri::HijriDate;

    fn grid(year: i32, month: u8) -> MonthGrid {
        generate_grid(MonthAnchor::new(year, month).expect("valid anchor"))
    }

    #[test]
    fn always_42_cells() {
        for year in 1440..1470 {
            for month in 1..=12 {
                assert_eq!(grid(year, month).cells.len(), GRID_CELLS);
            }
        }
        assert_eq!(grid(1, 1).cells.len(), GRID_CELLS);
    }

    #[test]
    fn segments_are_continuous() {
        for year in 1440..1450 {
            for month in 1..=12u8 {
                let g = grid(year, month);
                let leading = g.leading();
                let current = g.current();
                let trailing = g.trailing();

                assert!(leading.iter().all(|c| !c.is_current_month));
                assert!(current.iter().all(|c| c.is_current_month));
                assert!(trailing.iter().all(|c| !c.is_current_month));

                assert_eq!(current.len(), usize::from(g.days_in_month));
                assert!(current.iter().map(|c| c.date).eq(1..=g.days_in_month));
                assert!(trailing.iter().map(|c| c.date).eq(1..=trailing.len() as u8));

                if let (Some(first), Some(last)) = (leading.first(), leading.last()) {
                    assert!(leading.windows(2).all(|w| w[1].date == w[0].date + 1));
                    // ends on the previous month's last day
                    let prev = MonthAnchor { year, month }.previous();
                    assert_eq!((last.year, last.month), (prev.year, prev.month));
                    assert_eq!(last.date, HijriDate::new(prev.year, prev.month, 1)
                        .expect("valid date")
                        .days_in_month());
                    assert!(first.date <= last.date);
                }
            }
        }
    }

    #[test]
    fn first_day_sits_under_its_weekday() {
        let g = grid(1445, 9);
        // 1 Ramadan 1445 was a Monday
        assert_eq!(g.first_weekday, 1);
        assert_eq!(g.position_of(1), Some(1));
        assert_eq!(g.cells[1], CalendarCell {
            date: 1,
            month: 9,
            year: 1445,
            is_current_month: true,
        });
        assert_eq!(g.leading(), &[CalendarCell {
            date: 29,
            month: 8,
            year: 1445,
            is_current_month: false,
        }]);
        for (idx, cell) in g.cells.iter().enumerate().filter(|(_, c)| c.is_current_month) {
            assert_eq!(
                weekday(cell.year, cell.month, cell.date),
                Ok((idx % 7) as u8)
            );
        }
    }

    #[test]
    fn muharram_spills_from_previous_year() {
        let g = grid(1446, 1);
        for cell in g.leading() {
            assert_eq!((cell.year, cell.month), (1445, 12));
        }
        // 1445 is a leap year, so its Dhu al-Hijjah ends on the 30th
        if let Some(last) = g.leading().last() {
            assert_eq!(last.date, 30);
        }
    }

    #[test]
    fn dhu_al_hijjah_spills_into_next_year() {
        let g = grid(1445, 12);
        assert!(!g.trailing().is_empty());
        for cell in g.trailing() {
            assert_eq!((cell.year, cell.month), (1446, 1));
        }
    }

    #[test]
    fn month_length_changes_trailing_count() {
        // Rajab (30 days) and Sha'ban (29 days) of the same year
        let rajab = grid(1445, 7);
        let shaban = grid(1445, 8);
        assert_eq!(rajab.days_in_month, 30);
        assert_eq!(shaban.days_in_month, 29);
        for g in [&rajab, &shaban] {
            assert_eq!(
                g.leading().len() + g.current().len() + g.trailing().len(),
                GRID_CELLS
            );
            assert_eq!(
                g.trailing().len(),
                GRID_CELLS - usize::from(g.first_weekday) - usize::from(g.days_in_month)
            );
        }
    }

    #[test]
    fn weeks_are_six_rows_of_seven() {
        let g = grid(1446, 3);
        let weeks: Vec<_> = g.weeks().collect();
        assert_eq!(weeks.len(), 6);
        assert!(weeks.iter().all(|w| w.len() == 7));
        assert_eq!(g.position_of(0), None);
        assert_eq!(g.position_of(31), None);
    }
}
