use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{Bracket, JurisdictionRule, JurisdictionTable};

/// Builds the 2025 jurisdiction rule table for all 50 US states.
///
/// Figures are 2025 estimates. New Hampshire and Washington tax only
/// certain interest/dividend or capital-gain income, which this model
/// does not cover; they are carried as no-tax states.
pub fn us_states() -> JurisdictionTable {
    let flat = |standard_deduction: Decimal, rate: Decimal| JurisdictionRule::Flat {
        standard_deduction,
        rate,
    };
    let progressive =
        |standard_deduction: Decimal, brackets: Vec<Bracket>| JurisdictionRule::Progressive {
            standard_deduction,
            brackets,
        };
    let b = |lower: Decimal, upper: Decimal, rate: Decimal| Bracket::new(lower, Some(upper), rate);
    let top = |lower: Decimal, rate: Decimal| Bracket::new(lower, None, rate);

    let mut rules = BTreeMap::new();
    let mut add = |name: &str, rule: JurisdictionRule| {
        rules.insert(name.to_string(), rule);
    };

    add(
        "Alabama",
        progressive(
            dec!(3000),
            vec![
                b(dec!(0), dec!(500), dec!(0.02)),
                b(dec!(500), dec!(3000), dec!(0.04)),
                top(dec!(3000), dec!(0.05)),
            ],
        ),
    );
    add("Alaska", JurisdictionRule::None);
    add("Arizona", flat(dec!(0), dec!(0.025)));
    add(
        "Arkansas",
        progressive(
            dec!(2200),
            vec![
                b(dec!(0), dec!(4100), dec!(0.02)),
                b(dec!(4100), dec!(8100), dec!(0.039)),
                top(dec!(8100), dec!(0.049)),
            ],
        ),
    );
    add(
        "California",
        progressive(
            dec!(0),
            vec![
                b(dec!(0), dec!(11000), dec!(0.01)),
                b(dec!(11000), dec!(26000), dec!(0.02)),
                b(dec!(26000), dec!(41000), dec!(0.04)),
                b(dec!(41000), dec!(57000), dec!(0.06)),
                b(dec!(57000), dec!(72000), dec!(0.08)),
                b(dec!(72000), dec!(368000), dec!(0.093)),
                b(dec!(368000), dec!(441000), dec!(0.103)),
                b(dec!(441000), dec!(736000), dec!(0.113)),
                b(dec!(736000), dec!(1000000), dec!(0.123)),
                top(dec!(1000000), dec!(0.133)),
            ],
        ),
    );
    add("Colorado", flat(dec!(0), dec!(0.044)));
    add(
        "Connecticut",
        progressive(
            dec!(0),
            vec![
                b(dec!(0), dec!(10000), dec!(0.03)),
                b(dec!(10000), dec!(50000), dec!(0.05)),
                b(dec!(50000), dec!(100000), dec!(0.055)),
                b(dec!(100000), dec!(200000), dec!(0.06)),
                b(dec!(200000), dec!(250000), dec!(0.065)),
                b(dec!(250000), dec!(500000), dec!(0.069)),
                top(dec!(500000), dec!(0.0699)),
            ],
        ),
    );
    add(
        "Delaware",
        progressive(
            dec!(3250),
            vec![
                b(dec!(0), dec!(2000), dec!(0)),
                b(dec!(2000), dec!(5000), dec!(0.022)),
                b(dec!(5000), dec!(10000), dec!(0.039)),
                b(dec!(10000), dec!(20000), dec!(0.048)),
                b(dec!(20000), dec!(25000), dec!(0.052)),
                b(dec!(25000), dec!(60000), dec!(0.0555)),
                top(dec!(60000), dec!(0.066)),
            ],
        ),
    );
    add("Florida", JurisdictionRule::None);
    add("Georgia", flat(dec!(5000), dec!(0.0549)));
    add(
        "Hawaii",
        progressive(
            dec!(2200),
            vec![
                b(dec!(0), dec!(2400), dec!(0.014)),
                b(dec!(2400), dec!(4800), dec!(0.032)),
                b(dec!(4800), dec!(9600), dec!(0.055)),
                b(dec!(9600), dec!(14400), dec!(0.064)),
                b(dec!(14400), dec!(19200), dec!(0.068)),
                b(dec!(19200), dec!(24000), dec!(0.072)),
                b(dec!(24000), dec!(36000), dec!(0.076)),
                b(dec!(36000), dec!(48000), dec!(0.079)),
                b(dec!(48000), dec!(150000), dec!(0.0825)),
                b(dec!(150000), dec!(175000), dec!(0.09)),
                b(dec!(175000), dec!(200000), dec!(0.10)),
                top(dec!(200000), dec!(0.11)),
            ],
        ),
    );
    add("Idaho", flat(dec!(0), dec!(0.058)));
    add("Illinois", flat(dec!(2775), dec!(0.0495)));
    add("Indiana", flat(dec!(1000), dec!(0.0315)));
    add(
        "Iowa",
        progressive(
            dec!(0),
            vec![
                b(dec!(0), dec!(1740), dec!(0.045)),
                b(dec!(1740), dec!(3480), dec!(0.06)),
                top(dec!(3480), dec!(0.064)),
            ],
        ),
    );
    add(
        "Kansas",
        progressive(
            dec!(3000),
            vec![
                b(dec!(0), dec!(15000), dec!(0.031)),
                b(dec!(15000), dec!(30000), dec!(0.0525)),
                top(dec!(30000), dec!(0.057)),
            ],
        ),
    );
    add("Kentucky", flat(dec!(0), dec!(0.045)));
    add(
        "Louisiana",
        progressive(
            dec!(4500),
            vec![
                b(dec!(0), dec!(12500), dec!(0.0185)),
                b(dec!(12500), dec!(50000), dec!(0.035)),
                top(dec!(50000), dec!(0.0425)),
            ],
        ),
    );
    add(
        "Maine",
        progressive(
            dec!(0),
            vec![
                b(dec!(0), dec!(25000), dec!(0.058)),
                b(dec!(25000), dec!(50000), dec!(0.0675)),
                top(dec!(50000), dec!(0.0715)),
            ],
        ),
    );
    add(
        "Maryland",
        progressive(
            dec!(2400),
            vec![
                b(dec!(0), dec!(1000), dec!(0.02)),
                b(dec!(1000), dec!(2000), dec!(0.03)),
                b(dec!(2000), dec!(3000), dec!(0.04)),
                b(dec!(3000), dec!(100000), dec!(0.0475)),
                b(dec!(100000), dec!(125000), dec!(0.05)),
                b(dec!(125000), dec!(150000), dec!(0.0525)),
                b(dec!(150000), dec!(250000), dec!(0.055)),
                top(dec!(250000), dec!(0.0575)),
            ],
        ),
    );
    add("Massachusetts", flat(dec!(4400), dec!(0.05)));
    add("Michigan", flat(dec!(0), dec!(0.0425)));
    add(
        "Minnesota",
        progressive(
            dec!(13825),
            vec![
                b(dec!(0), dec!(31000), dec!(0.0535)),
                b(dec!(31000), dec!(100000), dec!(0.068)),
                b(dec!(100000), dec!(183000), dec!(0.0785)),
                top(dec!(183000), dec!(0.0985)),
            ],
        ),
    );
    add(
        "Mississippi",
        progressive(
            dec!(2300),
            vec![
                b(dec!(0), dec!(5000), dec!(0)),
                b(dec!(5000), dec!(10000), dec!(0.04)),
                top(dec!(10000), dec!(0.05)),
            ],
        ),
    );
    add(
        "Missouri",
        progressive(
            dec!(0),
            vec![
                b(dec!(0), dec!(1000), dec!(0.015)),
                b(dec!(1000), dec!(2000), dec!(0.02)),
                b(dec!(2000), dec!(3000), dec!(0.025)),
                b(dec!(3000), dec!(4000), dec!(0.03)),
                b(dec!(4000), dec!(5000), dec!(0.035)),
                b(dec!(5000), dec!(6000), dec!(0.04)),
                b(dec!(6000), dec!(7000), dec!(0.045)),
                b(dec!(7000), dec!(8000), dec!(0.05)),
                b(dec!(8000), dec!(9000), dec!(0.0525)),
                top(dec!(9000), dec!(0.054)),
            ],
        ),
    );
    add(
        "Montana",
        progressive(
            dec!(0),
            vec![
                b(dec!(0), dec!(3400), dec!(0.01)),
                b(dec!(3400), dec!(5900), dec!(0.02)),
                b(dec!(5900), dec!(9000), dec!(0.03)),
                b(dec!(9000), dec!(12200), dec!(0.04)),
                b(dec!(12200), dec!(15700), dec!(0.05)),
                b(dec!(15700), dec!(20000), dec!(0.06)),
                top(dec!(20000), dec!(0.0675)),
            ],
        ),
    );
    add(
        "Nebraska",
        progressive(
            dec!(0),
            vec![
                b(dec!(0), dec!(3700), dec!(0.0246)),
                b(dec!(3700), dec!(22100), dec!(0.0351)),
                b(dec!(22100), dec!(35400), dec!(0.0501)),
                top(dec!(35400), dec!(0.0644)),
            ],
        ),
    );
    add("Nevada", JurisdictionRule::None);
    add("New Hampshire", JurisdictionRule::None);
    add(
        "New Jersey",
        progressive(
            dec!(0),
            vec![
                b(dec!(0), dec!(20000), dec!(0.014)),
                b(dec!(20000), dec!(35000), dec!(0.0175)),
                b(dec!(35000), dec!(40000), dec!(0.035)),
                b(dec!(40000), dec!(75000), dec!(0.05525)),
                b(dec!(75000), dec!(500000), dec!(0.0637)),
                b(dec!(500000), dec!(1000000), dec!(0.0897)),
                top(dec!(1000000), dec!(0.1075)),
            ],
        ),
    );
    add(
        "New Mexico",
        progressive(
            dec!(0),
            vec![
                b(dec!(0), dec!(5500), dec!(0.017)),
                b(dec!(5500), dec!(11000), dec!(0.032)),
                b(dec!(11000), dec!(16000), dec!(0.047)),
                b(dec!(16000), dec!(210000), dec!(0.049)),
                top(dec!(210000), dec!(0.059)),
            ],
        ),
    );
    add(
        "New York",
        progressive(
            dec!(8000),
            vec![
                b(dec!(0), dec!(8500), dec!(0.04)),
                b(dec!(8500), dec!(11700), dec!(0.045)),
                b(dec!(11700), dec!(13900), dec!(0.0525)),
                b(dec!(13900), dec!(80650), dec!(0.055)),
                b(dec!(80650), dec!(215400), dec!(0.06)),
                b(dec!(215400), dec!(1077550), dec!(0.0685)),
                b(dec!(1077550), dec!(5000000), dec!(0.0965)),
                b(dec!(5000000), dec!(25000000), dec!(0.103)),
                top(dec!(25000000), dec!(0.109)),
            ],
        ),
    );
    add("North Carolina", flat(dec!(0), dec!(0.0475)));
    add(
        "North Dakota",
        progressive(
            dec!(0),
            vec![
                b(dec!(0), dec!(41775), dec!(0.011)),
                b(dec!(41775), dec!(101050), dec!(0.0204)),
                b(dec!(101050), dec!(198550), dec!(0.0227)),
                b(dec!(198550), dec!(246700), dec!(0.0264)),
                top(dec!(246700), dec!(0.029)),
            ],
        ),
    );
    add(
        "Ohio",
        progressive(
            dec!(0),
            vec![
                b(dec!(0), dec!(26050), dec!(0)),
                b(dec!(26050), dec!(46100), dec!(0.02779)),
                b(dec!(46100), dec!(92150), dec!(0.03226)),
                b(dec!(92150), dec!(115300), dec!(0.03659)),
                top(dec!(115300), dec!(0.0399)),
            ],
        ),
    );
    add(
        "Oklahoma",
        progressive(
            dec!(6350),
            vec![
                b(dec!(0), dec!(1000), dec!(0.0025)),
                b(dec!(1000), dec!(2500), dec!(0.01)),
                b(dec!(2500), dec!(3750), dec!(0.02)),
                b(dec!(3750), dec!(4900), dec!(0.03)),
                b(dec!(4900), dec!(7200), dec!(0.04)),
                top(dec!(7200), dec!(0.0475)),
            ],
        ),
    );
    add(
        "Oregon",
        progressive(
            dec!(0),
            vec![
                b(dec!(0), dec!(4100), dec!(0.0475)),
                b(dec!(4100), dec!(10250), dec!(0.0675)),
                b(dec!(10250), dec!(125000), dec!(0.0875)),
                top(dec!(125000), dec!(0.099)),
            ],
        ),
    );
    add("Pennsylvania", flat(dec!(0), dec!(0.0307)));
    add(
        "Rhode Island",
        progressive(
            dec!(0),
            vec![
                b(dec!(0), dec!(73200), dec!(0.0375)),
                b(dec!(73200), dec!(166950), dec!(0.0475)),
                top(dec!(166950), dec!(0.0599)),
            ],
        ),
    );
    add(
        "South Carolina",
        progressive(
            dec!(0),
            vec![
                b(dec!(0), dec!(3460), dec!(0)),
                b(dec!(3460), dec!(6920), dec!(0.03)),
                b(dec!(6920), dec!(10380), dec!(0.04)),
                b(dec!(10380), dec!(13840), dec!(0.05)),
                b(dec!(13840), dec!(17300), dec!(0.06)),
                top(dec!(17300), dec!(0.065)),
            ],
        ),
    );
    add("South Dakota", JurisdictionRule::None);
    add("Tennessee", JurisdictionRule::None);
    add("Texas", JurisdictionRule::None);
    add("Utah", flat(dec!(0), dec!(0.0485)));
    add(
        "Vermont",
        progressive(
            dec!(0),
            vec![
                b(dec!(0), dec!(45000), dec!(0.035)),
                b(dec!(45000), dec!(109000), dec!(0.06)),
                b(dec!(109000), dec!(208650), dec!(0.0725)),
                top(dec!(208650), dec!(0.0875)),
            ],
        ),
    );
    add(
        "Virginia",
        progressive(
            dec!(0),
            vec![
                b(dec!(0), dec!(3000), dec!(0.02)),
                b(dec!(3000), dec!(5000), dec!(0.03)),
                b(dec!(5000), dec!(17000), dec!(0.05)),
                top(dec!(17000), dec!(0.0575)),
            ],
        ),
    );
    add("Washington", JurisdictionRule::None);
    add(
        "West Virginia",
        progressive(
            dec!(0),
            vec![
                b(dec!(0), dec!(10000), dec!(0.03)),
                b(dec!(10000), dec!(25000), dec!(0.04)),
                b(dec!(25000), dec!(40000), dec!(0.045)),
                b(dec!(40000), dec!(60000), dec!(0.06)),
                top(dec!(60000), dec!(0.065)),
            ],
        ),
    );
    add(
        "Wisconsin",
        progressive(
            dec!(0),
            vec![
                b(dec!(0), dec!(13810), dec!(0.035)),
                b(dec!(13810), dec!(27620), dec!(0.044)),
                b(dec!(27620), dec!(30470), dec!(0.053)),
                top(dec!(30470), dec!(0.0765)),
            ],
        ),
    );
    add("Wyoming", JurisdictionRule::None);

    JurisdictionTable::new(rules)
}
