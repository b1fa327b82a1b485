//! The built-in default catalog.
//!
//! Used when no stored catalog exists or the stored value was discarded as
//! corrupt. The data is the hospital's surgical code list; seed ids double
//! as codes, with `-1`/`-2` suffixes where the same code appears under both
//! insured and self-paid variants.

use crate::record::CodeRecord;

/// Build the default catalog, in its canonical order.
pub fn seed_catalog() -> Vec<CodeRecord> {
    SEED
        .iter()
        .map(|&(id, code, name_ch, name_en)| CodeRecord {
            id: id.to_string(),
            code: code.to_string(),
            name_ch: name_ch.to_string(),
            name_en: name_en.to_string(),
        })
        .collect()
}

/// `(id, code, name_ch, name_en)` rows of the default catalog.
const SEED: &[(&str, &str, &str, &str)] = &[
    ("70006B", "70006B", "肌肉或深部組織腫瘤切除術及異物取出術", "Excision of muscle or deep tissue tumor, deep foreign body"),
    ("71215C", "71215C", "二氧化碳雷射手術", "CO2 laser operation"),
    ("71899E", "71899E", "下腹動脈結紮後分離(用於產後大出血或骨盆出血)", "Hypogastric artery ligation related to postpartum hemorrhage or uncontrolled bleeding of pelvis"),
    ("71882E", "71882E", "子宮動脈結紮與分離", "uterine artery ligation"),
    ("72301H", "72301H", "腹股溝淋巴腺腫切除術", "Excision of inguinal lymphnode"),
    ("72308A", "72308A", "腹股溝淋巴腺腫根治清除術", "Radical inguinal lymphnode dissection"),
    ("73551F", "73551F", "骨盆腔淋巴腺切除術", "Pelvic lymphadenectomy"),
    ("75024C", "75024C", "後腹腔淋巴結摘除術", "Retroperitoneal LN dissection"),
    ("75030D", "75030D", "根除性淋巴結切除術", "Radical lymphadenectomy"),
    ("75036H", "75036H", "主動脈旁淋巴切除術", "Paraaortic lymph node dissection"),
    ("75027J", "75027J", "髖鼠蹊部淋巴根除術-單側", "Ileo-inguinal lymphadenectomy, U"),
    ("75028I", "75028I", "髖鼠蹊部淋巴根除術-雙側", "Ileo-inguinal lymphadenectomy, Bil"),
    ("73001F", "73001F", "腸粘連分離術", "Enterolysis, freeing adhesion"),
    ("73003D", "73003D", "腸粘連分離術及腸減壓", "Enterolysis + Bowel Decompression"),
    ("73512G", "73512G", "腸阻塞、分離腸粘連一併有腸切除及吻合", "Intest. obstruct. lysis adh.ban with resection & anastomosis of intestine"),
    ("73005B", "73005B", "腸粘連分離術及切除吻合", "Enterolysis + Resect + Anastamosis"),
    ("73007J", "73007J", "腸粘連分離術及改道", "Enterolysis + Bypass"),
    ("73057E", "73057E", "良性腸病灶切除術", "Excision, Benign bowel lesion"),
    ("73053I", "73053I", "邁克氏憩室切除術", "Meckel's diverticulectomy"),
    ("73067B", "73067B", "小腸切除術加吻合術", "Resection of small bowel, with anastomosis"),
    ("73471E", "73471E", "結腸部分切除術加吻合術", "Colectomy, partial, with anastomosis"),
    ("73111H", "73111H", "腸系膜之縫合及修補", "Suture and repair of mesentery"),
    ("73002E", "73002E", "腹腔鏡腸粘連剝離術", "Laparoscopic adhesionolysis"),
    ("73201F", "73201F", "闌尾膿瘍之引流", "Drainage of appendiceal abscess transabdominal"),
    ("73202E-1", "73202E", "闌尾切除術", "Appendectomy"),
    ("73203D", "73203D", "闌尾瘻管關閉", "Closure of appendiceal fistula"),
    ("73204C-1", "73204C", "腹腔鏡闌尾切除術", "Laparoscopic appendectomy"),
    ("73202E-2", "73202E", "闌尾切除術(自費)", "Appendectomy"),
    ("73204C-2", "73204C", "腹腔鏡闌尾切除術(自費)", "Laparoscopic appendectomy"),
    ("73401F", "73401F", "直腸周圍膿瘍之切開引流", "Incision and drainage for periproctal abscess"),
    ("73410D", "73410D", "薦骨與尾骨腫瘤切除,良性", "Excision, sacrococcygeal tumor, benign"),
    ("73419E", "73419E", "直腸膀胱瘻管切除術", "Closure fistula, reco-vesical"),
    ("73532A", "73532A", "腹壁膿瘍引流術", "Drainage of abdominal wall abscess"),
    ("73533J", "73533J", "腹壁腫瘤切除術-良性", "Excision of abdominal wall tumor, benign"),
    ("73531B", "73531B", "腹壁腫瘤切除術-惡性", "Excision of abdominal wall tumor, malignant"),
    ("74404F", "74404F", "腹壁疝氣修補術-併腸切除", "Repair of ventral hernia with bowel resection"),
    ("74403G", "74403G", "腹壁疝氣修補術-無腸切除", "Repair of ventral hernia without bowel resection"),
    ("74409A", "74409A", "腹壁疝氣修補術,嵌頓性-無腸切除", "Repair of ventral hernia incarceration-without bowel resection"),
    ("74410G", "74410G", "腹壁疝氣修補術,復發性-無腸切除", "Repair of ventral hernia recurrence-without bowel resection"),
    ("72845G", "72845G", "腹腔灌洗術", "Abdominal lavage"),
    ("74408B", "74408B", "腹腔膿瘍灌洗", "Peritoneal toilet"),
    ("74602H", "74602H", "腹腔內膿瘍引流術治療急性穿孔性腹膜炎", "Drainage of intraabdominal abscess for acute perforation peritonitis"),
    ("74603G", "74603G", "膈下膿瘍引流術", "Drainage of subphrenic abscess"),
    ("74604F", "74604F", "骨盆腔膿瘍引流術-經腹", "Drainage of pelvic abscess, transabdominal"),
    ("73630H", "73630H", "骨盆腔膿瘍引流術-經肛門", "Drainage of pelvic abscess, transanal"),
    ("74601I", "74601I", "剖腹探查術", "Exploratory laparotomy"),
    ("74605E", "74605E", "腹腔良性腫瘤切除術", "Excision of intraabdominal tumor, benign"),
    ("74607C", "74607C", "後腹腔良性腫瘤切除術", "Excision of retroperitoneal tumor, benign"),
    ("74609A", "74609A", "腹腔內異物卻除術", "Removal of intraabdominal foreign body"),
    ("78203I", "78203I", "後腹腔剖腹探查術", "Retroperitoneal exploratory laparotomy"),
    ("74606D", "74606D", "腹腔惡性腫瘤切除術", "Excision of intraabdominal tumor, malignant"),
    ("74608B", "74608B", "後腹腔惡性腫瘤切除術併後腹腔淋巴腺摘除術", "Excision of retroperitoneal tumor, malignant with retroperitoneal lymphadenectomy"),
    ("74610G", "74610G", "腹腔靜脈分流術", "Peritoneo-Venous shunt"),
    ("74613D", "74613D", "臍尿管或瘻管切除術與部分膀胱切除術", "Excision of Urachal duct or fistula with partial cystectomy"),
    ("75242I", "75242I", "腹式會陰尿道懸吊術", "Abdominal perineal urethral suspension (APUS)"),
    ("75402A", "75402A", "膀胱抽吸", "Aspiration bladder, with catheterization"),
    ("75403J", "75403J", "膀胱造口術-Open method", "Cystostomy - Open method"),
    ("75404I", "75404I", "膀胱造口術-Trocar method", "Cystostomy - Trocar method"),
    ("75414F", "75414F", "恥骨上膀胱造口術", "Suprapubic cystostomy"),
    ("75415E", "75415E", "恥骨上經皮造口術", "Trocar suprapubic cystostomy"),
    ("75405H", "75405H", "膀胱造口閉合", "Closure of cystostomy"),
    ("75431C", "75431C", "膀胱取石術", "Cystolithotomy"),
    ("75418B", "75418B", "膀胱部分切除術", "Partial cystectomy"),
    ("75421F", "75421F", "膀胱全切除術", "Cystectomy without pelvis LND without urethrectomy without bladder reconstruction"),
    ("75443H", "75443H", "膀胱全切除術合併尿道全切除術", "Cystectomy without pelvis LND with urethrectomy without bladder reconstruction"),
    ("75422E", "75422E", "膀胱全切除術合併原位新膀胱重建術", "Cystectomy without pelvis LND without urethrectomy with orthotopic neo-bladder reconstruction"),
    ("75452F", "75452F", "膀胱全切除術及尿道全切除術合併禁尿膀胱重建術", "Cystectomy without pelvis LND with urethrectomy with continent reservoir reconstruction"),
    ("75423D", "75423D", "膀胱全切除術合併骨盆腔淋巴切除術", "Cystectomy with pelvis LND without urethrectomy without bladder reconstruction"),
    ("75454D", "75454D", "膀胱全切除術及尿道全切除術合併骨盆腔淋巴切除術", "Cystectomy with pelvis LND with urethrectomy without bladder reconstruction"),
    ("75456B", "75456B", "膀胱全切除術及骨盆腔淋巴切除術及尿道全切除術合併禁尿膀胱重建術", "Cystectomy with pelvis LND with urethrectomy with continent reservoir reconstruction"),
    ("75429H", "75429H", "膀胱成形術或膀胱尿道成形術", "Cystoplasty or cystourethroplasty"),
    ("75425B", "75425B", "膀胱尿道成形術併單側或雙側輸尿管膀胱吻合術", "Cystourethroplasty with unilateral or bilateral uretero neo cystotomy"),
    ("75437G", "75437G", "膀胱頸尿道前固定術或尿道固定術", "Vesicourethropexy, anteriro or Urethropexy as Marshall-Marchetti type"),
    ("75427J", "75427J", "膀胱縫合術", "Cystorrhaphy"),
    ("75417C", "75417C", "膀胱陰道瘻管閉合術,由腹部開刀", "Closure fistula, vesicovaginal abdominal approach"),
    ("75438F", "75438F", "膀胱子宮瘻管閉合術,包含子宮切除術", "Closure fistula, vesicouterine with or without hysterectomy"),
    ("75439E", "75439E", "膀胱腸管成形術,包含腸吻合", "Enterocystoplasty including bowel anastomosis"),
    ("75448C", "75448C", "皮膚膀胱造口術", "Cutaneous vesicostomy"),
    ("75416D", "75416D", "經皮膀胱造療術", "Cutaneous cystostomy"),
    ("75447D", "75447D", "膀胱尿道鏡及輸尿管取石", "Cystourethroscopy with removal of ureteral calculus"),
    ("75441J", "75441J", "經尿道膀胱頸切開術", "Tur for bladder neck"),
    ("75434J", "75434J", "腹式尿失禁手術", "Transabdominal urinary incontinence surgery"),
    ("75432B", "75432B", "男性鐵弗龍注射", "Teflon injection in man"),
    ("75433A", "75433A", "女性鐵弗龍注射", "Teflon injection in female"),
    ("75435I", "75435I", "陰道式尿失禁手術(含Kelly plication)", "Transvaginal urinary incontinence surgery (Kelly plication included)"),
    ("75436H", "75436H", "Burch尿失禁手術", "Burch Colposuspension"),
    ("75408E", "75408E", "間質性膀胱炎膀胱尿道鏡擴張術", "Cystourethroscopy with dilation of bladder for interstitial cystitis"),
    ("75428I", "75428I", "膀胱憩室電燒", "Coagulation of bladder diverticulum"),
    ("75426A", "75426A", "部份膀胱及膀胱憩室切除術", "Partial cystectomy with excision of bladder diverticulum"),
    ("75419A", "75419A", "膀胱破裂修補術", "Repair of bladder rupture"),
    ("75413G", "75413G", "小腸膀胱增大術", "Augmentation of U-B with intestine"),
    ("75401B", "75401B", "膀胱懸吊術", "Suspension of urinary bladder"),
    ("75420G", "75420G", "KELLY手術", "KELLY operation"),
    ("75630D", "75630D", "尿道人工擴約肌植入術", "Artificial urinary sphincter implantation"),
    ("75409D", "75409D", "(後)腹腔鏡膀胱頸懸吊術", "(Retroperitoneoscopy) Laparoscopy, Bladder neck suspension"),
    ("75410J", "75410J", "(後)腹腔鏡膀胱憩室切除術(單個或多發性者)", "(Retroperitoneoscopy) Laparoscopy, Bladder diverticulectomy"),
    ("75601B", "75601B", "尿道結石(異物)除去術", "Remove of urethral stone or foreign body"),
    ("75608E", "75608E", "外尿道口息肉切除術", "Polypectomy, external urethral"),
    ("75607F", "75607F", "尿道腫瘤切除術", "Resection of urethral tumor"),
    ("75611I", "75611I", "尿道瘻管修補術(前段)", "Urethral fistulectomy (anterior)"),
    ("75609D", "75609D", "尿道瘻管修補術(後段)", "Urethral fistulectomy (posterior)"),
    ("75634J", "75634J", "尿道周膿瘍切開引流術", "I&D for peri-urethral abscess"),
    ("77001H", "77001H", "會陰膿腫切開引流(非產科)", "Incision and drainage of perineal abscess (Non-obstetric)"),
    ("77002G", "77002G", "會陰修補", "repair of perineum"),
    ("77003F", "77003F", "會陰修補及肛門損傷修補", "Repair of perinueum with repair of anal defects"),
    ("77004E", "77004E", "會陰修補及括約肌修補", "Repair of perinueum with sphincter repair"),
    ("77209J", "77209J", "女陰白斑切除術", "Excision of genital leukoderma"),
    ("77213C", "77213C", "廣泛性外陰膿瘍引流術", "Extended drainage of external genital abscess"),
    ("77222A", "77222A", "巴氏腺囊腫造袋術", "Marsupialization of Bartholin's gland cyst"),
    ("77221B", "77221B", "巴氏腺囊切除術", "Excision of Bartholin's gland"),
    ("77224I", "77224I", "前庭大腺囊腫切除", "Excision of sken's cyst"),
    ("77206C", "77206C", "女陰切除術或廣泛性外陰癌組織切除", "Simple vulvectomy or wide local excision of valvar cancer"),
    ("77208A", "77208A", "女陰切除術(合併皮膚或皮下組織重建)", "Simple vulvectomy (with skin graft or reconstruction of subcutaneous tissue)"),
    ("77211E", "77211E", "陰蒂切除術", "Clitoridectomy"),
    ("77212D", "77212D", "陰蒂整形術", "Clitoroplasty"),
    ("77216J", "77216J", "處女膜切開術", "Hymenotomy"),
    ("77207B", "77207B", "根治女陰切除術", "Radical Vulvgectomy"),
    ("77217I", "77217I", "處女膜重建術(自費)", "Hymenoplasty"),
    ("77236D", "77236D", "陰道切開探查術或骨盆腔膿腫引流", "Vaginotomy or drainage of pelvic abscess"),
    ("77234F", "77234F", "陰道囊腫切除術", "Excision of vaginal cyst"),
    ("77233G", "77233G", "陰道中膈切除術", "Resection of vaginal Septum"),
    ("77225H", "77225H", "陰道後穹窿切開術", "Incision of posterior fornix"),
    ("77238B", "77238B", "陰道縫合術(縫合陰道損傷,非產科)", "Vaginal wall repair (Non-obstetric)"),
    ("77241F", "77241F", "陰道會陰縫合術:縫合陰道及會陰損傷,(非產科)", "Colpoperineorrhaphy, suture of injury of vagina and/or perineum nonobstetrical"),
    ("77226G", "77226G", "前側陰道縫合術", "Colporrhaphy, anterior"),
    ("77227F", "77227F", "後側陰道縫合術", "Colporrhaphy, Posterior"),
    ("77228E", "77228E", "前後側陰道縫合術", "Anterior and posterior colporrhaphy"),
    ("77229D", "77229D", "前後側陰道縫合術:包含腸膨出修補術", "Anterior and posterior colporrhaphy, (including repair of enterocele)"),
    ("77244C", "77244C", "經陰道骨盆底重建手術(陰道懸吊術,陰道前後壁修補)", "Transvaginal pelvic floor reconstruction (vaginal suspension, colporrhaphy combined anterior-posterior)"),
    ("77242E", "77242E", "從腹腔進入陰道固定術", "Transabdominal colpopexy"),
    ("77243D", "77243D", "經腹腔及陰道合併之骨盆底重建術(含子宮切除術)", "Combined abdominal and vaginal pelvic floor reconstrction (abdominal hysterectomy, sacrocolpopexy, colporrhaphy combined anterior-posterior)"),
    ("77260A", "77260A", "經陰道骨盆底重建手術(含子宮切除術,陰道懸吊術)", "Transvaginal pelvic floor reconstruction (transvaginal hysterectomy, sacro-spinal ligament fixation, colporrhaphy combined anterior-posterior)"),
    ("77254J", "77254J", "麻醉下之陰道擴張術", "Vaginal dilation under anesthesia"),
    ("77401H", "77401H", "子宮頸擴張術", "Cervical dilatation"),
    ("77257G", "77257G", "腹腔鏡式骨盆腔子宮內膜異位症電燒及切除-輕度", "Laparoscopic fulguration or excision of pelvic endometriosis Minimal to mild"),
    ("77258F", "77258F", "腹腔鏡式骨盆腔子宮內膜異位症電燒及切除-中度", "Laparoscopic fulguration or excision of pelvic endometriosis - Moderate"),
    ("77259E", "77259E", "腹腔鏡式骨盆腔子宮內膜異位症電燒及切除一重度", "Laparoscopic fulguration or excision of pelvic endometriosis Severe"),
    ("77231I", "77231I", "陰道切除術-陰道部份切除", "Partial resection of vagina"),
    ("77235E", "77235E", "陰道壁廣泛切除術", "Modified Latz-Ko's operation"),
    ("77230J", "77230J", "陰道切除術-陰道全部切除,陰道式", "Complete resection of vagina, vaginal approach"),
    ("77261J", "77261J", "陰道切除術-陰道全部切除,腹式合併陰道式", "Complete resection of vagina, combined abdominal and vaginal approach"),
    ("77232H", "77232H", "陰道閉合術", "LeFort colpocleisis"),
    ("77239A", "77239A", "人工陰道重建術(陰道狹窄或陰道缺失)-無皮膚移植", "Reconstruction of vagina (vaginal stenosis or vaginal defects, without skin graft)"),
    ("77247J", "77247J", "人工陰道重建術(陰道狹窄或陰道缺失)-有皮膚及大腸等移植", "Reconstruction of vagina (vagina stenosis or vaginal defects, with skin, colon or other graft)"),
    ("77248I", "77248I", "利用皮膚作陰道重建術", "Reconstruction of vagina - skin"),
    ("77249H", "77249H", "利用大腸作陰道重建術", "Reconstruction of vagina - colo"),
    ("77251C", "77251C", "初次直腸陰道瘻管修補術", "Primary recto-vaginal fistula repair"),
    ("77262I", "77262I", "再次直腸陰道瘻管修補術", "Recurrent recto-vaginal fistula repair"),
    ("77252B", "77252B", "尿道陰道瘻管修補術", "Urethral vaginal fistula repair"),
    ("77253A", "77253A", "膀胱陰道瘻管修補術", "Vesico vaginal fistula repair"),
    ("77246A", "77246A", "從陰道進入之陰道固定術", "Colpopexy, vaginal approach"),
    ("77245B", "77245B", "腹腔鏡陰道懸吊術", "Laparoscopic colpopexy"),
    ("77263H", "77263H", "經腹腔之骨盆底重建術", "Transabdominal pelvic floor reconstruction"),
    ("77264G", "77264G", "陰道人工網膜外露修復術", "Vaginal mesh extrusion repair"),
    ("77265F", "77265F", "陰道式會陰尿道懸吊術", "Vaginal perineal urethral suspension(VPUS)"),
    ("77417I", "77417I", "陰道式子宮頸切除術", "Vaginal trachelectomy"),
    ("77412D", "77412D", "腹式子宮頸切除術", "Abdominal trachelectomy"),
    ("77413C", "77413C", "根除式子宮頸切除術", "Radical trachelectomy"),
    ("77418H", "77418H", "子宮頸整形術", "Tracheloplasty"),
    ("78216C", "78216C", "子宮頸坐縮術", "Shirodker isthmorrhaply"),
    ("77419G", "77419G", "子宮頸縫合術", "Cervical cerclage"),
    ("93553F", "93553F", "子宮頸坐縮術縫線(自費)", "MERSILENE RS21-22 INCOMP CERVIX"),
    ("77416J", "77416J", "子宮頸殘餘部擴張刮除術", "Dilation and curettage of cervical stump"),
    ("77405D", "77405D", "子宮頸楔狀切除術", "Cervical conization"),
    ("77406C", "77406C", "子宮頸錐狀切片(刀切)", "Cervical conization by knife"),
    ("77411E", "77411E", "子宮頸錐狀切片(利用雷射)", "Uterine cervix laser conization"),
    ("77408A", "77408A", "子宮頸切斷術", "Cervical amputation"),
    ("77410F", "77410F", "子宮頸蒂瘤切除術", "Cervical polypectomy"),
    ("77407B", "77407B", "陰道式殘餘子宮頸切除術", "Vaginal excision of cervical stump"),
    ("77414B", "77414B", "腹式殘餘子宮頸切除術", "Abdominal excision of cervical stump"),
    ("77409J", "77409J", "經陰道子宮懸吊合併子宮頸部份切除術", "Manchester operation (Transvaginal uterine suspension with partial cervicectomy)"),
    ("77402G", "77402G", "診斷性子宮擴括手術(非產科)", "D&C for diagnosis (not OBS)"),
    ("77403F", "77403F", "治療性子宮擴括手術(非產科)", "D&C for treatment (not OBS)"),
    ("64518C", "64518C", "月經規則術(自費)", "Menstrual Regulation"),
    ("77601H", "77601H", "一般子宮肌瘤切除術", "Uncomplicated myomectomy"),
    ("77629D", "77629D", "複雜性子宮肌瘤切除術", "Complicated myomectomy"),
    ("77602G", "77602G", "一般全子宮切除術", "Uncomplicated total hysterectomy"),
    ("77630J", "77630J", "複雜性全子宮切除術", "Complicated total hysterectomy"),
    ("77603F", "77603F", "次全子宮切除術", "Subtotal hysterectomy"),
    ("77812D", "77812D", "骨盆腔粘連分離術", "Lysis of pelvic (abdominal) adhesion"),
    ("77823J", "77823J", "輸卵管剝離術-無顯微鏡", "Salpingolysis no microscope"),
    ("77608A", "77608A", "子宮懸吊術", "Uterine suspension"),
    ("77811E", "77811E", "子宮廣韌帶裂傷修補或切除術", "Repair or resection of broad ligament"),
    ("77631I", "77631I", "子宮輸卵管造口吻合術", "Hysterosalpingostomy"),
    ("77605D", "77605D", "子宮縫合術", "Hysterorrhaphy"),
    ("77604E", "77604E", "子宮整形術", "Metroplastic surgery"),
    ("77610F", "77610F", "雙子宮整形術", "Unitication of Uterus"),
    ("77813C", "77813C", "Spalding-Richardson 氏子宮脱出手術", "Spalding-Richardson's operation"),
    ("77817I", "77817I", "廣泛性全子宮切除術", "Extended hysterectomy"),
    ("77819G", "77819G", "子宮頸癌全子宮根除術", "Radical hysterectomy for cervical cancer"),
    ("77818H", "77818H", "陰道式子宮根治手術(Schauta式手術)", "Hysterectomy vaginal radical, Schauta type procedure"),
    ("77614B", "77614B", "子宮鏡子宮肌瘤切除術", "Hysteroscopic myomectomy"),
    ("77616J", "77616J", "子宮鏡下子宮腔隔膜切除術", "Resection uterine septum,hystero"),
    ("77615A", "77615A", "子宮鏡下子宮內膜息肉切除術", "Hysteroscopic polypectomy"),
    ("77618H", "77618H", "子宮鏡下子宮異物去除術", "Hysteroscopic removal FB"),
    ("77617I", "77617I", "子宮鏡下子宮內膜切除術", "Endonactrial ablation, hysteros"),
    ("77619G", "77619G", "子宮鏡下子宮內黏連剝離", "Lysis uterine adhesion, hysteros"),
    ("77612D", "77612D", "腹腔鏡全子宮切除術", "Laparoscopy hysterectomy"),
    ("77626G", "77626G", "婦癌分期手術", "Gynecologic cancer staging surgery (BSO+omentectomy+ATH+retroperitoneal lymphadenectomy)"),
    ("77632H", "77632H", "腹腔鏡式婦癌分期手術", "Laparoscopic gynecologic oncology staging surgery"),
    ("77627F", "77627F", "婦癌減積手術", "Debulking surgery for gynecologic cancer (BSO+omentectomy+ATH+retroperitoneal lymphadenectomy+radical dissection)"),
    ("77628E", "77628E", "婦癌二次剖腹探查術", "Gynecologic oncology second-look laparotomy"),
    ("77600I", "77600I", "腹腔鏡子宮肌瘤切除術", "Laparoscopy myomectomy"),
    ("77805D", "77805D", "輸卵管整形術", "Salpingoplasty"),
    ("77809J", "77809J", "輸卵管造口術-有顯微鏡", "Salpingostomy with microscope"),
    ("77827F", "77827F", "輸卵管補植術-無顯微鏡", "Reimplantation no microscope"),
    ("77822A", "77822A", "輸卵管剝離術", "Salpingolysis with microscopic"),
    ("77824I", "77824I", "輸卵管吻合術", "End to end anastomosis"),
    ("77810F", "77810F", "輸卵管造口術", "Salpingostomy without microscopic"),
    ("77826G", "77826G", "輸卵管補植術", "Reimplantation with microscopic"),
    ("77803F", "77803F", "輸卵管橫截術(自費)", "Transection Fallopian tube"),
    ("77808A", "77808A", "輸卵管結紮後重建手術(自費)", "Tubal reconst. S/P T/L"),
    ("77815A", "77815A", "腹腔鏡下輸卵管切除術(自費)", "Salpingectomy, laparoscopic"),
    ("77821B", "77821B", "輸卵管結紮術(自費)", "Tubal ligation"),
    ("78012G", "78012G", "卵巢切除術附加大網膜切除術", "Oophorectomy with omentectomy"),
    ("78004H", "78004H", "腹腔鏡子宮附屬器(卵巢輸卵管)部分或全部切除術-單側", "Laparoscopic partial or complete adnexectomy, unilateral (USO/enucleation/salpingectomy)"),
    ("78017B", "78017B", "腹腔鏡子宮附屬器(卵巢輸卵管)部分或全部切除術-雙側", "Laparoscopic partial or complete adnexectomy, bilateral (BSO/enucleation/salpingectomy)"),
    ("78007E", "78007E", "卵巢癌再次手術探查術", "Second look operation for ovarian cancer"),
    ("78211H", "78211H", "葡萄胎或絨毛膜癌除去術", "Removal of molar pregnancy or choriocarcinoma"),
    ("78212G", "78212G", "子宮外孕手術", "Ectopic pregnancy operation"),
    ("78214E", "78214E", "胎盤取出術", "Manual removal of placenta"),
    ("78221E", "78221E", "剖腹產術", "Cesarean section"),
    ("78226A", "78226A", "剖腹產術,自行要需求額外付費21000", "CS, self-require, extra pay 21000"),
    ("78222D", "78222D", "前置胎盤或植入性胎盤之剖腹產", "C/S due to placenta previa or placenta accreta"),
    ("78223C", "78223C", "剖腹產合併次全子宮切除術", "Subtotal hysterectomy after Cesarean section"),
    ("78224B", "78224B", "剖腹產合併全子宮切除術", "Total hysterectomy after Cesarean section"),
    ("78232A", "78232A", "妊娠前十二週流產刮宮術", "D&C (≤12.Week)"),
    ("78234I", "78234I", "人工流產手術(自費)", "D&C, OBS"),
    ("78233J", "78233J", "妊娠超過十二週流產或死胎刮宮術", "D&C (>12.Week)"),
    ("78235H", "78235H", "引產無效後之流產或死胎刮宮術", "Dilation and evacuation after induction failure"),
    ("78242H", "78242H", "療病流產:以擴張及括除包括吸出括除", "Therapeutic abortion by D&C S&C"),
    ("78236G", "78236G", "子宮內管刮除術", "Endocervical curettage"),
    ("78243G", "78243G", "子宮切開流產術", "Hysterotomy for termination of pregnancy"),
    ("78245E", "78245E", "死胎之引產(12-24週)", "Medical induction for fetal death (12-24 weeks)"),
    ("78246D", "78246D", "死胎之引產(超過24週)", "Medical induction for fetal death (after 24 weeks)"),
    ("78244F", "78244F", "死胎破取術", "Destruction of the dead fetus"),
    ("77613C", "77613C", "骨盤腔臟器摘除術", "Pelvic exenteration-Total or Anterior or Posterior"),
    ("77624I", "77624I", "經腹部子宮內避孕器移除術", "Transabdominal removal of intrauterine device"),
    ("77625H", "77625H", "薦骨前神經截斷術", "Pre-sacral neurectomy"),
    ("77633G", "77633G", "腹腔鏡式薦骨前神經截斷術", "Laparoscopic pre-sacral neurectomy"),
    ("77701C", "77701C", "無妊娠併發症之陰道產", "Vaginal delivery in normal pregnancy"),
    ("77707G", "77707G", "有妊娠併發症之陰道產", "Vaginal delivery in complicated pregnancy (defined as cases with preeclampsia, eclampsia, GDM, malpresentation, and documented major medical or surgical complications)"),
    ("77702B", "77702B", "雙胎分娩", "Vaginal delivery of twins"),
    ("77703A", "77703A", "多胎分娩", "Vaginal delivery of multiple pregnancy"),
    ("78213F", "78213F", "腹腔鏡子宮外孕手術(含腹腔鏡子宮外孕藥物注射)", "Laparoscopic surgery for ectopic pregnancy (including laparoscopic local injection)"),
    ("78011H", "78011H", "骨盆腔惡性腫瘤消滅術", "Debulking operation for pelvic cancer"),
    ("78001H", "78001H", "子宮附屬器(卵巢輸卵管)部份或全部切除-單側", "Partial or complete adnexectomy, unilateral (USO/enucleation/salpingectomy)"),
    ("78002G", "78002G", "子宮附屬器(卵巢輸卵管)部份或全部切除-雙側", "Partial or complete adnexectomy, bilateral (BSO/enucleation/salpingectomy)"),
    ("78006F", "78006F", "卵巢膿瘍切開引流術", "Incision and drainage of ovarian abscess"),
    ("78002J", "78002J", "卵巢部份切片術", "Biopsy ovary, incisional"),
    ("43417D", "43417D", "膀胱鏡檢", "Fibrocystoscopy"),
    ("43453F", "43453F", "診斷性子宮鏡", "Diagnostic hysteroscopy"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::normalize_records;

    #[test]
    fn test_seed_size() {
        assert_eq!(seed_catalog().len(), 252);
    }

    #[test]
    fn test_seed_ids_unique_and_nonempty() {
        let seed = seed_catalog();
        let normalized = normalize_records(seed.clone());
        assert_eq!(normalized, seed);
    }

    #[test]
    fn test_seed_fields_nonempty() {
        for record in seed_catalog() {
            assert!(!record.code.is_empty(), "{}", record.id);
            assert!(!record.name_ch.is_empty(), "{}", record.id);
            assert!(!record.name_en.is_empty(), "{}", record.id);
        }
    }

    #[test]
    fn test_seed_contains_duplicate_codes_under_distinct_ids() {
        // Insured and self-paid appendectomy share a code but not an id.
        let seed = seed_catalog();
        let appendectomies: Vec<_> = seed.iter().filter(|r| r.code == "73202E").collect();
        assert_eq!(appendectomies.len(), 2);
        assert_ne!(appendectomies[0].id, appendectomies[1].id);
    }
}
