//! Glue between the sharing core and a [`ShareStore`].
//!
//! The core functions never see storage; these helpers load and persist
//! records around them for the command line and the interactive menu.

use crate::error::{KeysplitError, Result};
use crate::lagrange::recover_text;
use crate::share::Share;
use crate::sss::split;
use crate::store::{ShareId, ShareStore};

/// Splits `secret` and writes every share. Nothing is written when the
/// parameters are rejected.
pub fn split_to_store<S: ShareStore + ?Sized>(
    store: &mut S,
    secret: &str,
    threshold: usize,
    total: usize,
) -> Result<Vec<Share>> {
    let shares = split(threshold, secret.as_bytes(), total)?;
    for share in &shares {
        store.put(share)?;
    }
    Ok(shares)
}

/// Loads the referenced shares, stopping at the first missing, malformed or
/// foreign-modulus record.
pub fn load_shares<S: ShareStore + ?Sized>(store: &S, ids: &[ShareId]) -> Result<Vec<Share>> {
    let mut shares: Vec<Share> = Vec::with_capacity(ids.len());
    for id in ids {
        let share = store.get(id)?;
        if let Some(first) = shares.first() {
            if first.modulus != share.modulus {
                return Err(KeysplitError::ModulusMismatch);
            }
        }
        shares.push(share);
    }
    if shares.is_empty() {
        return Err(KeysplitError::EmptyInput);
    }
    Ok(shares)
}

pub fn reconstruct_from_store<S: ShareStore + ?Sized>(
    store: &S,
    ids: &[ShareId],
    strict: bool,
) -> Result<String> {
    let shares = load_shares(store, ids)?;
    recover_text(&shares, strict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryShareStore;

    #[test]
    fn split_then_reconstruct_by_number() {
        let mut store = MemoryShareStore::new();
        let shares = split_to_store(&mut store, "hi", 2, 3).unwrap();
        assert_eq!(shares.len(), 3);
        assert_eq!(store.len(), 3);

        let ids = ShareId::parse_args(&["1", "3"]).unwrap();
        assert_eq!(reconstruct_from_store(&store, &ids, false).unwrap(), "hi");
    }

    #[test]
    fn rejected_split_writes_nothing() {
        let mut store = MemoryShareStore::new();
        assert!(matches!(
            split_to_store(&mut store, "x", 1, 3),
            Err(KeysplitError::InvalidParameters { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn missing_share_aborts() {
        let mut store = MemoryShareStore::new();
        split_to_store(&mut store, "hi", 2, 3).unwrap();
        let ids = [ShareId::Index(1), ShareId::Index(4)];
        assert!(matches!(
            reconstruct_from_store(&store, &ids, false),
            Err(KeysplitError::MissingShare(_))
        ));
    }

    #[test]
    fn shares_from_different_splits_do_not_mix() {
        let mut store = MemoryShareStore::new();
        split_to_store(&mut store, "first secret", 2, 2).unwrap();
        let other = split(2, b"a much longer second secret", 2).unwrap();
        store.insert_record("other.txt", other[1].to_record());

        let ids = [ShareId::Index(1), ShareId::Path("other.txt".into())];
        assert!(matches!(
            reconstruct_from_store(&store, &ids, false),
            Err(KeysplitError::ModulusMismatch)
        ));
    }

    #[test]
    fn no_ids() {
        let store = MemoryShareStore::new();
        assert!(matches!(
            reconstruct_from_store(&store, &[], false),
            Err(KeysplitError::EmptyInput)
        ));
    }
}
