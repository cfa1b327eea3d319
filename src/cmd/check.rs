// Copyright 2026 The studydeck Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::error::Fallible;

pub fn check_catalog(directory: &PathBuf) -> Fallible<()> {
    let _ = Catalog::load(directory)?;
    println!("ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::check_catalog;

    #[test]
    fn test_non_existent_directory() {
        let directory = PathBuf::from("./derpherp");
        assert!(check_catalog(&directory).is_err());
    }

    #[test]
    fn test_directory() {
        let directory = PathBuf::from("./test");
        assert!(check_catalog(&directory).is_ok());
    }
}
