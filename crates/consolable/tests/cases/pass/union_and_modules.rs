// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

mod storage {
    use consolable::consolable;

    /// Union receiving members.
    #[consolable("[Bits]")]
    pub union Bits {
        pub int:   u32,
        pub float: f32
    }

    impl Bits {
        pub fn report(&self) {
            // SAFETY: both fields are plain 32-bit values.
            let int = unsafe { self.int };
            self.log(format!("bits = {int:#x}"), false);
        }
    }
}

fn main() {
    storage::Bits {
        float: 1.0
    }
    .report();
}
