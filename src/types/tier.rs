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

/// Classification of a submitted quiz score. Purely presentational.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tier {
    /// 90% and above.
    Excellent,
    /// Between 60% and 89%.
    Pass,
    /// Below 60%.
    Failing,
}

impl Tier {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 90 {
            Tier::Excellent
        } else if percentage < 60 {
            Tier::Failing
        } else {
            Tier::Pass
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Pass => "pass",
            Tier::Failing => "failing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(Tier::from_percentage(100), Tier::Excellent);
        assert_eq!(Tier::from_percentage(90), Tier::Excellent);
        assert_eq!(Tier::from_percentage(89), Tier::Pass);
        assert_eq!(Tier::from_percentage(60), Tier::Pass);
        assert_eq!(Tier::from_percentage(59), Tier::Failing);
        assert_eq!(Tier::from_percentage(0), Tier::Failing);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Tier::Excellent.as_str(), "excellent");
        assert_eq!(Tier::Pass.as_str(), "pass");
        assert_eq!(Tier::Failing.as_str(), "failing");
    }
}
