//! Table-driven decoding.
//!
//! An ISA is described as a tree of [`Node`]s. A switch selects a child by
//! `word & mask`; a leaf names the instruction and the bits that must be
//! zero for the encoding to be valid. A leaf whose reserved bits are set is
//! a miss: there is no fallthrough to sibling arms.

use tracing::trace;

use crate::instructions::{Insn, Op};

pub trait Decoder {
    fn decode(&self, raw32: u32) -> Option<Insn>;
}

#[derive(Debug, Clone, Copy)]
pub struct Leaf {
    pub op: Op,
    pub reserved: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct Arm {
    pub value: u32,
    pub node: Node,
}

#[derive(Debug, Clone, Copy)]
pub enum Node {
    Leaf(Leaf),
    /// `arms` must be sorted by `value` with no duplicates.
    Switch { mask: u32, arms: &'static [Arm] },
}

pub const fn leaf(op: Op) -> Node {
    Node::Leaf(Leaf { op, reserved: 0 })
}

/// Leaf that additionally requires `word & reserved == 0`.
pub const fn guarded(op: Op, reserved: u32) -> Node {
    Node::Leaf(Leaf { op, reserved })
}

pub const fn arm(value: u32, node: Node) -> Arm {
    Arm { value, node }
}

pub const fn switch(mask: u32, arms: &'static [Arm]) -> Node {
    Node::Switch { mask, arms }
}

/// Walk `root` for `word`.
pub fn walk(root: &Node, word: u32) -> Option<Op> {
    let mut node = root;
    loop {
        match node {
            Node::Leaf(leaf) => {
                if word & leaf.reserved != 0 {
                    trace!("{word:#010x}: reserved bits set for {}", leaf.op.mnemonic());
                    return None;
                }
                return Some(leaf.op);
            }
            Node::Switch { mask, arms } => {
                let key = word & mask;
                match arms.binary_search_by_key(&key, |a| a.value) {
                    Ok(i) => node = &arms[i].node,
                    Err(_) => {
                        trace!("{word:#010x}: no arm under mask {mask:#010x}");
                        return None;
                    }
                }
            }
        }
    }
}

/// One flattened path through a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoding {
    pub op: Op,
    /// Bits fixed by the switches on the path.
    pub mask: u32,
    /// Required value of `word & mask`.
    pub value: u32,
    /// Bits the leaf requires to be zero.
    pub reserved: u32,
}

/// Flatten `root` into one [`Encoding`] per leaf, in tree order.
pub fn flatten(root: &Node) -> Vec<Encoding> {
    fn go(node: &Node, mask: u32, value: u32, out: &mut Vec<Encoding>) {
        match node {
            Node::Leaf(leaf) => out.push(Encoding {
                op: leaf.op,
                mask,
                value,
                reserved: leaf.reserved,
            }),
            Node::Switch { mask: m, arms } => {
                for a in arms.iter() {
                    go(&a.node, mask | m, value | a.value, out);
                }
            }
        }
    }
    let mut out = Vec::new();
    go(root, 0, 0, &mut out);
    out
}

/// Check that every switch in `root` has sorted, unique arms whose values
/// fit inside the switch mask.
pub fn check_tree(root: &Node) -> Result<(), String> {
    match root {
        Node::Leaf(_) => Ok(()),
        Node::Switch { mask, arms } => {
            for pair in arms.windows(2) {
                if pair[0].value >= pair[1].value {
                    return Err(format!(
                        "arms under mask {mask:#010x} out of order at {:#010x}",
                        pair[1].value
                    ));
                }
            }
            for a in arms.iter() {
                if a.value & !mask != 0 {
                    return Err(format!("arm {:#010x} outside mask {mask:#010x}", a.value));
                }
                check_tree(&a.node)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOW: &[Arm] = &[arm(0x1, leaf(Op::And)), arm(0x2, leaf(Op::Or))];
    const TOP: &[Arm] = &[
        arm(0x1000_0000, leaf(Op::Add)),
        arm(0x2000_0000, guarded(Op::Sub, 0x0000_00FF)),
        arm(0x3000_0000, switch(0x0000_000F, LOW)),
    ];
    const TINY: Node = switch(0xF000_0000, TOP);

    #[test]
    fn walk_switches_and_guards() {
        assert_eq!(walk(&TINY, 0x1234_5678), Some(Op::Add));
        assert_eq!(walk(&TINY, 0x2000_0100), Some(Op::Sub));
        assert_eq!(walk(&TINY, 0x2000_0001), None);
        assert_eq!(walk(&TINY, 0x3000_0002), Some(Op::Or));
        assert_eq!(walk(&TINY, 0x3000_0003), None);
        assert_eq!(walk(&TINY, 0x0000_0000), None);
    }

    #[test]
    fn flatten_accumulates_masks() {
        let enc = flatten(&TINY);
        assert_eq!(enc.len(), 4);
        assert_eq!(
            enc[3],
            Encoding { op: Op::Or, mask: 0xF000_000F, value: 0x3000_0002, reserved: 0 }
        );
        assert_eq!(enc[1].reserved, 0xFF);
    }

    #[test]
    fn check_tree_rejects_unsorted_arms() {
        const UNSORTED: &[Arm] = &[arm(2, leaf(Op::Add)), arm(1, leaf(Op::Sub))];
        const OUTSIDE: &[Arm] = &[arm(0x10, leaf(Op::Add))];
        const BAD: Node = switch(0xF, UNSORTED);
        const WIDE: Node = switch(0xF, OUTSIDE);
        assert!(check_tree(&TINY).is_ok());
        assert!(check_tree(&BAD).is_err());
        assert!(check_tree(&WIDE).is_err());
    }
}
