#![no_main]
use libfuzzer_sys::fuzz_target;

use archtab::{arch, Architecture, LookupOptions};

fuzz_target!(|data: &[u8]| {
    if data.len() >= 4 {
        let id = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
        if let Ok(name) = arch::name_of(id) {
            assert_eq!(arch::id_of(name).ok(), Some(id));
            assert!(arch::personality_of(id).is_ok());
        } else {
            assert!(arch::personality_of(id).is_err());
        }
    }

    if let Ok(name) = std::str::from_utf8(data) {
        let strict = Architecture::from_name(name);
        let permissive = Architecture::from_name_with(name, &LookupOptions::permissive());
        if let Ok(arch) = strict {
            assert_eq!(arch.name(), name);
            assert_eq!(permissive.ok(), Some(arch));
        }
    }
});
