//! Expected stdout of a full run for each label set.

pub const EXPECTED_KO: &str = "\
3 * 3 = 9
4는 짝수인가? true
5의 제곱 = 25
15는 10보다 큰가? true
7의 두 배는? 14
-3은 음수인가? true
모든 수를 두 배로: [-10, 4, 16, 30, -4, 24, 2]
10보다 큰 수들: [15, 12]
음수들: [-5, -2]
[-10, 4, 16, 30, -4, 24, 2]
";

pub const EXPECTED_EN: &str = "\
3 * 3 = 9
Is 4 even? true
5 squared = 25
Is 15 greater than 10? true
What is 7 doubled? 14
Is -3 negative? true
All numbers doubled: [-10, 4, 16, 30, -4, 24, 2]
Numbers greater than 10: [15, 12]
Negatives: [-5, -2]
[-10, 4, 16, 30, -4, 24, 2]
";
