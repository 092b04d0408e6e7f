use crate::{
    model::error_log::ErrorLogDto,
    server::trans_param::{
        adm_user_name::AdmUserNameTransformer, yes_no::YesNo, SourceType, TransParamCode,
        TransParamTarget,
    },
};

const ERROR_LOG_CODES: &[TransParamCode] = &[
    TransParamCode {
        field: "login_name",
        source_type: SourceType::Db,
        key: AdmUserNameTransformer::KEY,
        field_name: "login_id",
        transformer: AdmUserNameTransformer::NAME,
    },
    TransParamCode {
        field: "notified_desc",
        source_type: SourceType::Enums,
        key: "YES_NO",
        field_name: "notified_yn",
        transformer: YesNo::NAME,
    },
];

impl TransParamTarget for ErrorLogDto {
    fn trans_param_codes() -> &'static [TransParamCode] {
        ERROR_LOG_CODES
    }

    fn field_value(&self, field_name: &str) -> Option<String> {
        match field_name {
            "login_id" => self.login_id.clone(),
            "notified_yn" => Some(self.notified_yn.clone()),
            _ => None,
        }
    }

    fn set_field_value(&mut self, field: &str, value: String) {
        match field {
            "login_name" => self.login_name = Some(value),
            "notified_desc" => self.notified_desc = Some(value),
            _ => {}
        }
    }
}
