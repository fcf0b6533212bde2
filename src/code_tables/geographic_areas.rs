//! MARC Code List for Geographic Areas.
//!
//! Every code is exactly seven characters, right-padded with hyphens
//! (`n-us---`, `n-us-ca`). Used by field 043.

use std::collections::HashSet;

use lazy_static::lazy_static;

use super::CodeStatus;

const VALID_GEOGRAPHIC_AREAS: &[&str] = &[
    "a------", "a-af---", "a-ai---", "a-aj---", "a-ba---", "a-bg---", "a-bn---", "a-br---",
    "a-bt---", "a-bx---", "a-cb---", "a-cc---", "a-ccg--", "a-cck--", "a-ccp--", "a-ccs--",
    "a-ccy--", "a-ce---", "a-ch---", "a-cy---", "a-em---", "a-gs---", "a-ii---", "a-io---",
    "a-iq---", "a-ir---", "a-is---", "a-ja---", "a-jo---", "a-kg---", "a-kn---", "a-ko---",
    "a-kr---", "a-ku---", "a-kz---", "a-le---", "a-ls---", "a-mk---", "a-mp---", "a-my---",
    "a-np---", "a-nw---", "a-ok---", "a-ph---", "a-pk---", "a-pp---", "a-qa---", "a-si---",
    "a-su---", "a-sy---", "a-ta---", "a-th---", "a-tk---", "a-ts---", "a-tu---", "a-uz---",
    "a-vt---", "a-ye---", "aa-----", "ab-----", "ac-----", "ae-----", "af-----", "ag-----",
    "ah-----", "ai-----", "ak-----", "am-----", "an-----", "ao-----", "aopf---", "aoxp---",
    "ap-----", "ar-----", "as-----", "at-----", "au-----", "aw-----", "awba---", "awgz---",
    "ay-----", "az-----", "a-cc-an", "a-cc-ch", "a-cc-cq", "a-cc-fu", "a-cc-ha", "a-cc-he",
    "a-cc-hh", "a-cc-hk", "a-cc-ho", "a-cc-hp", "a-cc-hu", "a-cc-im", "a-cc-ka", "a-cc-kc",
    "a-cc-ki", "a-cc-kn", "a-cc-kr", "a-cc-ku", "a-cc-kw", "a-cc-lp", "a-cc-mh", "a-cc-nn",
    "a-cc-pe", "a-cc-sh", "a-cc-sm", "a-cc-sp", "a-cc-ss", "a-cc-su", "a-cc-sz", "a-cc-ti",
    "a-cc-tn", "a-cc-ts", "a-cc-yu", "b------", "c------", "cc-----", "cl-----", "d------",
    "dd-----", "e------", "e-aa---", "e-an---", "e-au---", "e-be---", "e-bn---", "e-bu---",
    "e-bw---", "e-ci---", "e-cs---", "e-dk---", "e-er---", "e-fi---", "e-fr---", "e-ge---",
    "e-gi---", "e-gr---", "e-gw---", "e-gx---", "e-hu---", "e-ic---", "e-ie---", "e-im---",
    "e-it---", "e-kv---", "e-lh---", "e-li---", "e-lu---", "e-lv---", "e-mc---", "e-mm---",
    "e-mo---", "e-mv---", "e-ne---", "e-no---", "e-pl---", "e-po---", "e-rb---", "e-rm---",
    "e-ru---", "e-sm---", "e-sp---", "e-sw---", "e-sz---", "e-uk---", "e-uk-en", "e-uk-ni",
    "e-uk-st", "e-uk-ui", "e-uk-wl", "e-un---", "e-ur---", "e-urc--", "e-ure--", "e-urf--",
    "e-urk--", "e-url--", "e-urn--", "e-urp--", "e-urr--", "e-urs--", "e-uru--", "e-urw--",
    "e-vc---", "e-xn---", "e-xo---", "e-xr---", "e-xv---", "e-yu---", "ea-----", "eb-----",
    "ec-----", "ed-----", "ee-----", "el-----", "en-----", "eo-----", "ep-----", "er-----",
    "es-----", "ev-----", "ew-----", "f------", "f-ae---", "f-ao---", "f-bd---", "f-bs---",
    "f-cd---", "f-cf---", "f-cg---", "f-cm---", "f-cx---", "f-dm---", "f-ea---", "f-eg---",
    "f-et---", "f-ft---", "f-gh---", "f-gm---", "f-go---", "f-gv---", "f-iv---", "f-ke---",
    "f-lb---", "f-lo---", "f-ly---", "f-mg---", "f-ml---", "f-mr---", "f-mu---", "f-mw---",
    "f-mz---", "f-ng---", "f-nr---", "f-pg---", "f-rh---", "f-rw---", "f-sa---", "f-sd---",
    "f-sf---", "f-sg---", "f-sh---", "f-sj---", "f-sl---", "f-so---", "f-sq---", "f-ss---",
    "f-sx---", "f-tg---", "f-ti---", "f-tz---", "f-ua---", "f-ug---", "f-uv---", "f-za---",
    "fa-----", "fb-----", "fc-----", "fd-----", "fe-----", "ff-----", "fg-----", "fh-----",
    "fi-----", "fl-----", "fn-----", "fq-----", "fr-----", "fs-----", "fu-----", "fv-----",
    "fw-----", "fz-----", "h------", "i------", "i-bi---", "i-cq---", "i-fs---", "i-hm---",
    "i-mf---", "i-my---", "i-re---", "i-se---", "i-xa---", "i-xb---", "i-xc---", "l------",
    "ln-----", "lnaz---", "lnbm---", "lnca---", "lncv---", "lnfa---", "lnjn---", "lnma---",
    "lnsb---", "ls-----", "lsai---", "lsbv---", "lsfk---", "lstd---", "lsxj---", "lsxs---",
    "m------", "me-----", "mm-----", "n------", "n-cn---", "n-cn-ab", "n-cn-bc", "n-cn-mb",
    "n-cn-nf", "n-cn-nk", "n-cn-ns", "n-cn-nt", "n-cn-nu", "n-cn-on", "n-cn-pi", "n-cn-qu",
    "n-cn-sn", "n-cn-yk", "n-cnh--", "n-cnm--", "n-cnp--", "n-gl---", "n-mx---", "n-us---",
    "n-us-ak", "n-us-al", "n-us-ar", "n-us-az", "n-us-ca", "n-us-co", "n-us-ct", "n-us-dc",
    "n-us-de", "n-us-fl", "n-us-ga", "n-us-hi", "n-us-ia", "n-us-id", "n-us-il", "n-us-in",
    "n-us-ks", "n-us-ky", "n-us-la", "n-us-ma", "n-us-md", "n-us-me", "n-us-mi", "n-us-mn",
    "n-us-mo", "n-us-ms", "n-us-mt", "n-us-nb", "n-us-nc", "n-us-nd", "n-us-nh", "n-us-nj",
    "n-us-nm", "n-us-nv", "n-us-ny", "n-us-oh", "n-us-ok", "n-us-or", "n-us-pa", "n-us-ri",
    "n-us-sc", "n-us-sd", "n-us-tn", "n-us-tx", "n-us-ut", "n-us-va", "n-us-vt", "n-us-wa",
    "n-us-wi", "n-us-wv", "n-us-wy", "n-usa--", "n-usc--", "n-use--", "n-usl--", "n-usm--",
    "n-usn--", "n-uso--", "n-usp--", "n-usr--", "n-uss--", "n-ust--", "n-usu--", "n-usw--",
    "n-xl---", "nc-----", "ncbh---", "nccr---", "nccz---", "nces---", "ncgt---", "ncho---",
    "ncnq---", "ncpn---", "nl-----", "np-----", "nr-----", "nw-----", "nwaq---", "nwaw---",
    "nwbb---", "nwbc---", "nwbf---", "nwbn---", "nwcj---", "nwco---", "nwcu---", "nwdq---",
    "nwdr---", "nweu---", "nwga---", "nwgd---", "nwgp---", "nwgs---", "nwha---", "nwhi---",
    "nwjm---", "nwla---", "nwli---", "nwmj---", "nwmq---", "nwpr---", "nwsa---", "nwsb---",
    "nwsn---", "nwst---", "nwtc---", "nwtr---", "nwuc---", "nwvb---", "nwvi---", "nwwi---",
    "nwxa---", "nwxi---", "nwxk---", "nwxm---", "p------", "pn-----", "po-----", "poas---",
    "pobp---", "poci---", "pocw---", "poea---", "pofj---", "pofp---", "pogg---", "pogu---",
    "poji---", "pokb---", "poki---", "poln---", "pome---", "pomi---", "ponl---", "ponn---",
    "ponu---", "popc---", "popl---", "pops---", "posc---", "posh---", "potl---", "poto---",
    "pott---", "potv---", "poup---", "powf---", "powk---", "pows---", "poxd---", "poxe---",
    "poxf---", "poxh---", "ps-----", "q------", "r------", "s------", "s-ag---", "s-bl---",
    "s-bo---", "s-ck---", "s-cl---", "s-ec---", "s-fg---", "s-gy---", "s-pe---", "s-py---",
    "s-sr---", "s-uy---", "s-ve---", "sa-----", "sn-----", "sp-----", "t------", "t-ay---",
    "u------", "u-ac---", "u-at---", "u-at-ac", "u-at-ne", "u-at-no", "u-at-qn", "u-at-sa",
    "u-at-tm", "u-at-vi", "u-at-we", "u-atc--", "u-ate--", "u-atn--", "u-cs---", "u-nz---",
    "v------", "w------", "x------", "xa-----", "xb-----", "xc-----", "xd-----", "zd-----",
    "zju----", "zma----", "zme----", "zmo----", "zne----", "zo-----", "zpl----", "zs-----",
    "zsa----", "zsu----", "zur----", "zve----",
];

/// Former Soviet republics coded under `e-ur-`, merged or renamed areas.
const OBSOLETE_GEOGRAPHIC_AREAS: &[&str] = &[
    "a-hk---", "a-mh---", "a-pt---", "a-ry---", "a-sk---", "a-vn---", "a-vs---", "a-ys---",
    "awiu---", "awiw---", "e-ur-ai", "e-ur-aj", "e-ur-bw", "e-ur-er", "e-ur-gs", "e-ur-kg",
    "e-ur-kz", "e-ur-li", "e-ur-lv", "e-ur-mv", "e-ur-ru", "e-ur-ta", "e-ur-tk", "e-ur-un",
    "e-ur-uz", "i-xo---", "nwna---", "nwsc---", "pory---",
];

lazy_static! {
    static ref VALID: HashSet<&'static str> = VALID_GEOGRAPHIC_AREAS.iter().copied().collect();
    static ref OBSOLETE: HashSet<&'static str> =
        OBSOLETE_GEOGRAPHIC_AREAS.iter().copied().collect();
}

/// Look up a seven-character geographic area code.
///
/// # Examples
///
/// ```
/// use marc_lint::code_tables::{geographic_area_status, CodeStatus};
///
/// assert_eq!(geographic_area_status("n-us-ny"), CodeStatus::Valid);
/// assert_eq!(geographic_area_status("e-ur-kz"), CodeStatus::Obsolete);
/// assert_eq!(geographic_area_status("x-xx-xx"), CodeStatus::Unknown);
/// ```
#[must_use]
pub fn geographic_area_status(code: &str) -> CodeStatus {
    CodeStatus::lookup(code, &VALID, &OBSOLETE)
}
