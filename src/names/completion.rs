//! Substring autocomplete over the name index.

use super::database::NameDatabase;

/// Collect every registered name containing `fragment` as a case-insensitive
/// substring, in ascending canonical-name order.
///
/// With `with_greek` set, the fragment is first widened to every accepted
/// spelling of the Greek letter it names ("ALF" also searches "Alpha" and
/// "α"), with the verbatim fragment searched last. Result lists of the
/// widened queries are concatenated as-is: a name matching two query
/// spellings appears twice. Callers wanting distinct names dedup themselves.
pub fn completion(db: &NameDatabase, fragment: &str, with_greek: bool) -> Vec<String> {
    if with_greek {
        let mut queries = db.greek().synonyms(fragment);
        queries.push(fragment.to_string());
        return queries
            .iter()
            .flat_map(|q| completion(db, q, false))
            .collect();
    }

    let needle = fragment.to_lowercase();
    db.name_index
        .keys()
        .filter(|name| name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
