//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use crosspattern::Outcome;
    use crosspattern::io::progress::ProgressManager;
    use crosspattern::spatial::Grid;

    // Tests outcomes are tallied by kind and advance the bar
    // Verified by counting exhausted outcomes as found
    #[test]
    fn test_record_tallies_outcomes() {
        let mut progress = ProgressManager::hidden();

        progress.record(&Outcome::Found {
            grid: Grid::new(3),
            attempts: 4,
        });
        progress.record(&Outcome::Exhausted { attempts: 10 });
        progress.record(&Outcome::Exhausted { attempts: 10 });

        assert_eq!(progress.found(), 1);
        assert_eq!(progress.exhausted(), 2);
        assert_eq!(progress.position(), 3);
        progress.finish();
    }

    // Tests a visible bar can be created and finished without output errors
    // Verified by panicking on template construction
    #[test]
    fn test_visible_bar_lifecycle() {
        let mut progress = ProgressManager::new(2);
        progress.record(&Outcome::Exhausted { attempts: 1 });
        assert_eq!(progress.position(), 1);
        progress.finish();
    }
}
