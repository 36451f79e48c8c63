//! Tests for the shared best-ever record

#[cfg(test)]
mod tests {
    use bilateral_search::algorithm::best::BestRecord;
    use bilateral_search::algorithm::chromosome::Chromosome;
    use std::thread;

    #[test]
    fn test_empty_record() {
        let record = BestRecord::new();

        assert!(record.get().is_none());
        assert!(record.fitness().abs() < f64::EPSILON);
    }

    // Tests only strictly greater fitness replaces the record
    // Verified by replacing on equal fitness
    #[test]
    fn test_strict_improvement_only() {
        let record = BestRecord::new();
        let first = Chromosome::new(1, 10, 5);
        let equal = Chromosome::new(2, 10, 5);
        let worse = Chromosome::new(3, 10, 5);
        let better = Chromosome::new(4, 10, 5);

        assert!(record.offer(0.5, first));
        assert!(!record.offer(0.5, equal));
        assert!(!record.offer(0.4, worse));
        assert_eq!(record.get().map(|s| s.chromosome), Some(first));

        assert!(record.offer(0.6, better));
        assert_eq!(record.get().map(|s| s.chromosome), Some(better));
    }

    // Tests concurrent offers never lose the maximum
    // Verified by writing without comparing under the lock
    #[test]
    fn test_concurrent_offers_keep_maximum() {
        let record = BestRecord::new();

        thread::scope(|scope| {
            for worker in 0..8_u32 {
                let record = &record;
                scope.spawn(move || {
                    for step in 0..500_u32 {
                        let value = worker * 500 + step;
                        let fitness = f64::from(value) / 4000.0;
                        record.offer(fitness, Chromosome::new(worker, step, 1));
                    }
                });
            }
        });

        let best = record.get().expect("offers were made");
        assert!((best.fitness - 3999.0 / 4000.0).abs() < f64::EPSILON);
        assert_eq!(best.chromosome, Chromosome::new(7, 499, 1));
    }
}
