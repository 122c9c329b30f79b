// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::registry::std::Slot;

use super::{Probe, Tag};

static FIRST: Probe = Probe(1);
static SECOND: Probe = Probe(2);

#[test]
fn test_empty_slot() {
    let slot: Slot<dyn Tag + Sync> = Slot::new();

    assert!(slot.get().is_none());
    assert!(!slot.remove_if(&FIRST));
}

#[test]
fn test_install_returns_previous() {
    let slot: Slot<dyn Tag + Sync> = Slot::new();

    assert!(slot.install(&FIRST).is_none());
    assert_eq!(slot.get().map(|probe| probe.tag()), Some(1));

    let previous = slot.install(&SECOND);
    assert_eq!(previous.map(|probe| probe.tag()), Some(1));
    assert_eq!(slot.get().map(|probe| probe.tag()), Some(2));
}

#[test]
fn test_remove_if_only_clears_matching_value() {
    let slot: Slot<dyn Tag + Sync> = Slot::new();

    slot.install(&FIRST);
    slot.install(&SECOND);

    assert!(!slot.remove_if(&FIRST));
    assert_eq!(slot.get().map(|probe| probe.tag()), Some(2));

    assert!(slot.remove_if(&SECOND));
    assert!(slot.get().is_none());
    assert!(!slot.remove_if(&SECOND));
}

#[test]
fn test_concurrent_install_and_get() {
    let slot: Slot<dyn Tag + Sync> = Slot::new();

    ::std::thread::scope(|scope| {
        for i in 0..8 {
            let slot = &slot;
            scope.spawn(move || {
                for _ in 0..1000 {
                    if i % 2 == 0 {
                        slot.install(&FIRST);
                    } else {
                        slot.install(&SECOND);
                    }

                    let tag = slot.get().map(|probe| probe.tag());
                    assert!(matches!(tag, Some(1) | Some(2)));
                }
            });
        }
    });

    assert!(slot.get().is_some());
}
