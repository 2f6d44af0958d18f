//! Merkle tree computation over the one-time public keys (RFC 8554
//! section 5.3). Nodes are addressed with 1-based heap indices; leaves
//! occupy `2^h ..= 2^(h+1) - 1`.

use tinyvec::ArrayVec;

use crate::{
    constants::{Node, D_INTR, D_LEAF, MAX_TREE_HEIGHT},
    hasher::HashChain,
    lm_ots,
    util::ustr::u32str,
};

use super::definitions::LmsPrivateKey;

/// Recomputes the value of tree node `node_index` from the private seed.
///
/// The whole subtree below the node is rebuilt, so the cost is linear in the
/// number of leaves it covers. Keys are regenerated from seeds instead of
/// being cached, trading time for a constant-size private key.
pub(crate) fn subtree_root<H: HashChain>(
    node_index: u32,
    private_key: &LmsPrivateKey<H>,
) -> Node {
    let num_leafs = private_key.lms_parameter.number_of_lm_ots_keys();

    let mut hasher = H::default();
    hasher.update(&private_key.lms_tree_identifier);
    hasher.update(&u32str(node_index));

    if node_index >= num_leafs {
        let leaf_number = node_index - num_leafs;
        let ots_private_key = private_key.ots_private_key(leaf_number);
        let ots_public_key = lm_ots::generate_public_key(&ots_private_key);

        hasher.update(&D_LEAF);
        hasher.update(ots_public_key.key.as_slice());
    } else {
        let left = subtree_root(2 * node_index, private_key);
        let right = subtree_root(2 * node_index + 1, private_key);

        hasher.update(&D_INTR);
        hasher.update(left.as_slice());
        hasher.update(right.as_slice());
    }

    hasher.finalize()
}

/// Collects the sibling node values on the way from leaf `leaf_number` up to
/// the root, ordered bottom to top.
pub(crate) fn authentication_path<H: HashChain>(
    private_key: &LmsPrivateKey<H>,
    leaf_number: u32,
) -> ArrayVec<[Node; MAX_TREE_HEIGHT]> {
    let mut path = ArrayVec::new();

    let mut node_index = private_key.lms_parameter.number_of_lm_ots_keys() + leaf_number;
    while node_index > 1 {
        path.push(subtree_root(node_index ^ 1, private_key));
        node_index >>= 1;
    }

    path
}
