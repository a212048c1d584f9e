//! The default morpheme tables, embedded as TOML.
//!
//! Retained-ring keys are the structural pattern descriptors computed by
//! the ring nomenclature engine: `mono:` entries match single rings,
//! `fused:` entries match fused polycyclic skeletons, and `link:` entries
//! match ring systems joined by a single inter-ring bond.

pub(crate) const DEFAULT_MORPHEMES_TOML: &str = r#"
[alkanes]
1 = "meth"
2 = "eth"
3 = "prop"
4 = "but"
5 = "pent"
6 = "hex"
7 = "hept"
8 = "oct"
9 = "non"
10 = "dec"
11 = "undec"
12 = "dodec"
13 = "tridec"
14 = "tetradec"
15 = "pentadec"
16 = "hexadec"
17 = "heptadec"
18 = "octadec"
19 = "nonadec"
20 = "eicos"
21 = "henicos"
22 = "docos"
23 = "tricos"
24 = "tetracos"
25 = "pentacos"
26 = "hexacos"
27 = "heptacos"
28 = "octacos"
29 = "nonacos"
30 = "triacont"
31 = "hentriacont"
32 = "dotriacont"
33 = "tritriacont"
34 = "tetratriacont"
35 = "pentatriacont"
36 = "hexatriacont"
37 = "heptatriacont"
38 = "octatriacont"
39 = "nonatriacont"
40 = "tetracont"

[multipliers.basic]
2 = "di"
3 = "tri"
4 = "tetra"
5 = "penta"
6 = "hexa"
7 = "hepta"
8 = "octa"
9 = "nona"
10 = "deca"
11 = "undeca"
12 = "dodeca"

[multipliers.group]
2 = "bis"
3 = "tris"
4 = "tetrakis"
5 = "pentakis"
6 = "hexakis"
7 = "heptakis"
8 = "octakis"

[heteroatom_prefixes]
O = "oxa"
N = "aza"
S = "thia"
P = "phospha"
Si = "sila"
B = "bora"
Ge = "germa"
As = "arsa"
Se = "selena"
Sn = "stanna"
Sb = "stiba"
Te = "tellura"

[functional_groups.carboxylic_acid]
priority = 1
suffix = "oic acid"
prefix = "carboxy"
name = "carboxylic acid"

[functional_groups.ester]
priority = 2
suffix = "oate"
prefix = "oxycarbonyl"
name = "ester"

[functional_groups.amide]
priority = 3
suffix = "amide"
prefix = "carbamoyl"
name = "amide"

[functional_groups.nitrile]
priority = 4
suffix = "nitrile"
prefix = "cyano"
name = "nitrile"

[functional_groups.aldehyde]
priority = 5
suffix = "al"
prefix = "oxo"
name = "aldehyde"

[functional_groups.ketone]
priority = 6
suffix = "one"
prefix = "oxo"
name = "ketone"

[functional_groups.alcohol]
priority = 7
suffix = "ol"
prefix = "hydroxy"
name = "alcohol"

[functional_groups.thiol]
priority = 8
suffix = "thiol"
prefix = "sulfanyl"
name = "thiol"

[functional_groups.amine]
priority = 9
suffix = "amine"
prefix = "amino"
name = "amine"

[functional_groups.sulfonyl]
priority = 10
suffix = ""
prefix = "sulfonyl"
name = "sulfonyl"

[functional_groups.sulfinyl]
priority = 11
suffix = ""
prefix = "sulfinyl"
name = "sulfinyl"

[functional_groups.nitro]
priority = 12
suffix = ""
prefix = "nitro"
name = "nitro"

[functional_groups.nitroso]
priority = 13
suffix = ""
prefix = "nitroso"
name = "nitroso"

[functional_groups.ether]
priority = 14
suffix = ""
prefix = "oxy"
name = "ether"

[functional_groups.thioether]
priority = 15
suffix = ""
prefix = "sulfanyl"
name = "thioether"

[functional_groups.halide]
priority = 16
suffix = ""
prefix = "halo"
name = "halide"

[functional_groups.phosphanyl]
priority = 17
suffix = ""
prefix = "phosphanyl"
name = "phosphanyl"

[functional_groups.borane]
priority = 18
suffix = ""
prefix = "boranyl"
name = "borane"

[substituents.methyl]
aliases = ["Me"]
prefix = "methyl"
priority = 0

[substituents.ethyl]
aliases = ["Et"]
prefix = "ethyl"
priority = 0

[substituents.phenyl]
aliases = ["Ph"]
prefix = "phenyl"
priority = 0

[substituents.hydroxy]
prefix = "hydroxy"
priority = 7

[substituents.amino]
prefix = "amino"
priority = 9

[substituents.fluoro]
prefix = "fluoro"
priority = 16

[substituents.chloro]
prefix = "chloro"
priority = 16

[substituents.bromo]
prefix = "bromo"
priority = 16

[substituents.iodo]
prefix = "iodo"
priority = 16

[retained_rings]
"mono:benzene" = "benzene"
"mono:pyridine" = "pyridine"
"mono:pyrimidine" = "pyrimidine"
"mono:pyrazine" = "pyrazine"
"mono:pyridazine" = "pyridazine"
"mono:1,2,3-triazine" = "1,2,3-triazine"
"mono:1,2,4-triazine" = "1,2,4-triazine"
"mono:1,3,5-triazine" = "1,3,5-triazine"
"mono:tetrazine" = "1,2,4,5-tetrazine"
"mono:oxazine" = "1,4-oxazine"
"mono:thiazine" = "1,4-thiazine"
"mono:furan" = "furan"
"mono:pyrrole" = "pyrrole"
"mono:thiophene" = "thiophene"
"mono:imidazole" = "imidazole"
"mono:pyrazole" = "pyrazole"
"mono:oxazole" = "1,3-oxazole"
"mono:isoxazole" = "1,2-oxazole"
"mono:thiazole" = "1,3-thiazole"
"mono:isothiazole" = "1,2-thiazole"
"mono:triazole" = "triazole"
"mono:tetrazole" = "tetrazole"
"fused:naphthalene" = "naphthalene"
"fused:anthracene" = "anthracene"
"fused:phenanthrene" = "phenanthrene"
"fused:pyrene" = "pyrene"
"fused:fluorene" = "9H-fluorene"
"fused:azulene" = "azulene"
"fused:indole" = "1H-indole"
"fused:benzofuran" = "1-benzofuran"
"fused:benzothiophene" = "1-benzothiophene"
"fused:quinoline" = "quinoline"
"fused:isoquinoline" = "isoquinoline"
"fused:carbazole" = "9H-carbazole"
"fused:xanthene" = "9H-xanthene"
"fused:chrysene" = "chrysene"
"fused:acridine" = "acridine"
"link:biphenyl" = "biphenyl"
"#;
