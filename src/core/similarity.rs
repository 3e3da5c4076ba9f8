use std::collections::HashSet;

/// Calculate how similar two interest lists are, as a 0-100 percentage
///
/// This is the Jaccard index of the two tag sets:
/// score = |common| / |union| * 100
///
/// Either list being empty yields 0. Halfway values round to even.
pub fn similarity(user_interests: &[String], target_interests: &[String]) -> u8 {
    if user_interests.is_empty() || target_interests.is_empty() {
        return 0;
    }

    let user_set: HashSet<&str> = user_interests.iter().map(String::as_str).collect();
    let target_set: HashSet<&str> = target_interests.iter().map(String::as_str).collect();

    let common = user_set.intersection(&target_set).count() as f64;
    let total = user_set.union(&target_set).count() as f64;

    ((common / total) * 100.0).round_ties_even() as u8
}
