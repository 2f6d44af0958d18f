use crate::{
    hasher::HashChain,
    lm_ots::parameters::{LmotsAlgorithm, LmotsParameter},
    lms::parameters::{LmsAlgorithm, LmsParameter},
};

/**
 * Winternitz parameter ([`LmotsAlgorithm`]) and tree height ([`LmsAlgorithm`])
 * of one level of the hierarchy. Key generation takes one `HssParameter` per
 * level, ordered root first.
 * */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HssParameter<H: HashChain> {
    lmots_parameter: LmotsParameter<H>,
    lms_parameter: LmsParameter<H>,
}

impl<H: HashChain> Copy for HssParameter<H> {}

impl<H: HashChain> HssParameter<H> {
    /// # Panics
    /// Panics when a reserved typecode is passed.
    pub fn new(lmots_algorithm: LmotsAlgorithm, lms_algorithm: LmsAlgorithm) -> Self {
        let lmots_parameter = lmots_algorithm
            .construct_parameter()
            .expect("use a registered one-time signature typecode");
        let lms_parameter = lms_algorithm
            .construct_parameter()
            .expect("use a registered tree typecode");

        HssParameter {
            lmots_parameter,
            lms_parameter,
        }
    }

    pub fn get_lmots_parameter(&self) -> &LmotsParameter<H> {
        &self.lmots_parameter
    }

    pub fn get_lms_parameter(&self) -> &LmsParameter<H> {
        &self.lms_parameter
    }

    pub fn construct_default_parameters() -> Self {
        HssParameter::new(LmotsAlgorithm::LmotsW1, LmsAlgorithm::LmsH5)
    }
}

impl<H: HashChain> Default for HssParameter<H> {
    fn default() -> Self {
        HssParameter::construct_default_parameters()
    }
}
