use crate::domain::model::{Category, Credits};
use crate::utils::error::{Result, TallyError};

/// 依學分分類結果。fail >= 80 優先判定為 Exclude。
///
/// Returns [`TallyError::UnclassifiableCredits`] when no rule matches. No
/// triple accepted by [`Credits::new`] gets there.
pub fn classify(pass: u32, defer: u32, fail: u32) -> Result<Category> {
    if fail >= 80 {
        return Ok(Category::Exclude);
    }

    if pass == 120 {
        Ok(Category::Progress)
    } else if pass == 100 {
        Ok(Category::ProgressWithTrailer)
    } else if pass >= 40 || (defer >= 40 && pass <= 20) {
        Ok(Category::NoProgressRetriever)
    } else {
        Err(TallyError::UnclassifiableCredits { pass, defer, fail })
    }
}

pub fn classify_credits(credits: &Credits) -> Result<Category> {
    classify(credits.pass(), credits.defer(), credits.fail())
}
