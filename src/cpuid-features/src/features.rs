// Copyright 2022 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

#![doc = r" Auto-generated from `data/cpuid_features.json` by `build.rs`. Do not edit."]
use crate::CpuidFeatureInfo;
#[doc = r" `CPUID` feature flags."]
#[doc = r""]
#[doc = r" Discriminants are assigned by declaration order and are stable: the"]
#[doc = r" feature list is append-only, so a raw value persisted by a consumer"]
#[doc = r" keeps naming the same feature across releases."]
#[allow(non_camel_case_types)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde :: Serialize,
    serde :: Deserialize,
)]
#[repr(u16)]
pub enum CpuidFeature {
    #[doc = "8086 or later"]
    INTEL8086,
    #[doc = "8086 only"]
    INTEL8086_ONLY,
    #[doc = "80186 or later"]
    INTEL186,
    #[doc = "80286 or later"]
    INTEL286,
    #[doc = "80286 only"]
    INTEL286_ONLY,
    #[doc = "80386 or later"]
    INTEL386,
    #[doc = "80386 only"]
    INTEL386_ONLY,
    #[doc = "80386 A0-B0 stepping only (`XBTS`, `IBTS` instructions)"]
    INTEL386_A0_ONLY,
    #[doc = "Intel486 or later"]
    INTEL486,
    #[doc = "Intel486 A stepping only (`CMPXCHG`)"]
    INTEL486_A_ONLY,
    #[doc = "80386 and Intel486 only"]
    INTEL386_486_ONLY,
    #[doc = "IA-64"]
    IA64,
    #[doc = "CPUID.80000001H:EDX.LM[bit 29]"]
    X64,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.ADX[bit 19]"]
    ADX,
    #[doc = "CPUID.01H:ECX.AES[bit 25]"]
    AES,
    #[doc = "CPUID.01H:ECX.AVX[bit 28]"]
    AVX,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.AVX2[bit 5]"]
    AVX2,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EDX.AVX512_4FMAPS[bit 3]"]
    AVX512_4FMAPS,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EDX.AVX512_4VNNIW[bit 2]"]
    AVX512_4VNNIW,
    #[doc = "CPUID.(EAX=07H, ECX=1H):EAX[bit 5]"]
    AVX512_BF16,
    #[doc = "CPUID.(EAX=07H, ECX=0H):ECX.AVX512_BITALG[bit 12]"]
    AVX512_BITALG,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.AVX512_IFMA[bit 21]"]
    AVX512_IFMA,
    #[doc = "CPUID.(EAX=07H, ECX=0H):ECX.AVX512_VBMI[bit 1]"]
    AVX512_VBMI,
    #[doc = "CPUID.(EAX=07H, ECX=0H):ECX.AVX512_VBMI2[bit 6]"]
    AVX512_VBMI2,
    #[doc = "CPUID.(EAX=07H, ECX=0H):ECX.AVX512_VNNI[bit 11]"]
    AVX512_VNNI,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EDX[bit 08]"]
    AVX512_VP2INTERSECT,
    #[doc = "CPUID.(EAX=07H, ECX=0H):ECX.AVX512_VPOPCNTDQ[bit 14]"]
    AVX512_VPOPCNTDQ,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.AVX512BW[bit 30]"]
    AVX512BW,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.AVX512CD[bit 28]"]
    AVX512CD,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.AVX512DQ[bit 17]"]
    AVX512DQ,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.AVX512ER[bit 27]"]
    AVX512ER,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.AVX512F[bit 16]"]
    AVX512F,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.AVX512PF[bit 26]"]
    AVX512PF,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.AVX512VL[bit 31]"]
    AVX512VL,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.BMI1[bit 3]"]
    BMI1,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.BMI2[bit 8]"]
    BMI2,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EDX.CET_IBT[bit 20]"]
    CET_IBT,
    #[doc = "CPUID.(EAX=07H, ECX=0H):ECX.CET_SS[bit 7]"]
    CET_SS,
    #[doc = "`CL1INVMB` instruction (Intel SCC = Single-Chip Computer)"]
    CL1INVMB,
    #[doc = "CPUID.(EAX=07H, ECX=0H):ECX.CLDEMOTE[bit 25]"]
    CLDEMOTE,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.CLFLUSHOPT[bit 23]"]
    CLFLUSHOPT,
    #[doc = "CPUID.01H:EDX.CLFSH[bit 19]"]
    CLFSH,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.CLWB[bit 24]"]
    CLWB,
    #[doc = "CPUID.80000008H:EBX.CLZERO[bit 0]"]
    CLZERO,
    #[doc = "CPUID.01H:EDX.CMOV[bit 15]"]
    CMOV,
    #[doc = "CPUID.01H:ECX.CMPXCHG16B[bit 13]"]
    CMPXCHG16B,
    #[doc = "`RFLAGS.ID` can be toggled"]
    CPUID,
    #[doc = "CPUID.01H:EDX.CX8[bit 8]"]
    CX8,
    #[doc = "CPUID.80000001H:EDX.3DNOW[bit 31]"]
    D3NOW,
    #[doc = "CPUID.80000001H:EDX.3DNOWEXT[bit 30]"]
    D3NOWEXT,
    #[doc = "CPUID.(EAX=12H, ECX=0H):EAX.OSS[bit 5]"]
    ENCLV,
    #[doc = "CPUID.(EAX=07H, ECX=0H):ECX[bit 29]"]
    ENQCMD,
    #[doc = "CPUID.01H:ECX.F16C[bit 29]"]
    F16C,
    #[doc = "CPUID.01H:ECX.FMA[bit 12]"]
    FMA,
    #[doc = "CPUID.80000001H:ECX.FMA4[bit 16]"]
    FMA4,
    #[doc = "8087 or later (CPUID.01H:EDX.FPU[bit 0])"]
    FPU,
    #[doc = "80287 or later"]
    FPU287,
    #[doc = "80287XL only"]
    FPU287XL_ONLY,
    #[doc = "80387 or later"]
    FPU387,
    #[doc = "80387SL only"]
    FPU387SL_ONLY,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.FSGSBASE[bit 0]"]
    FSGSBASE,
    #[doc = "CPUID.01H:EDX.FXSR[bit 24]"]
    FXSR,
    #[doc = "AMD Geode LX/GX CPU"]
    GEODE,
    #[doc = "CPUID.(EAX=07H, ECX=0H):ECX.GFNI[bit 8]"]
    GFNI,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.HLE[bit 4]"]
    HLE,
    #[doc = "`HLE` or `RTM`"]
    HLE_or_RTM,
    #[doc = "`VMX` and IA32_VMX_EPT_VPID_CAP[bit 20]"]
    INVEPT,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.INVPCID[bit 10]"]
    INVPCID,
    #[doc = "`VMX` and IA32_VMX_EPT_VPID_CAP[bit 32]"]
    INVVPID,
    #[doc = "CPUID.80000001H:ECX.LWP[bit 15]"]
    LWP,
    #[doc = "CPUID.80000001H:ECX.LZCNT[bit 5]"]
    LZCNT,
    #[doc = "CPUID.80000008H:EBX.MCOMMIT[bit 8]"]
    MCOMMIT,
    #[doc = "CPUID.01H:EDX.MMX[bit 23]"]
    MMX,
    #[doc = "CPUID.01H:ECX.MONITOR[bit 3]"]
    MONITOR,
    #[doc = "CPUID.80000001H:ECX.MONITORX[bit 29]"]
    MONITORX,
    #[doc = "CPUID.01H:ECX.MOVBE[bit 22]"]
    MOVBE,
    #[doc = "CPUID.(EAX=07H, ECX=0H):ECX.MOVDIR64B[bit 28]"]
    MOVDIR64B,
    #[doc = "CPUID.(EAX=07H, ECX=0H):ECX.MOVDIRI[bit 27]"]
    MOVDIRI,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.MPX[bit 14]"]
    MPX,
    #[doc = "CPUID.01H:EDX.MSR[bit 5]"]
    MSR,
    #[doc = "Multi-byte nops (`0F1F /0`): CPUID.01H.EAX[Bits 11:8] = 0110B or 1111B"]
    MULTIBYTENOP,
    #[doc = "CPUID.0C0000000H:EAX >= 0C0000001H AND CPUID.0C0000001H:EDX.ACE[Bits 7:6] = 11B ([6] = exists, [7] = enabled)"]
    PADLOCK_ACE,
    #[doc = "CPUID.0C0000000H:EAX >= 0C0000001H AND CPUID.0C0000001H:EDX.PHE[Bits 11:10] = 11B ([10] = exists, [11] = enabled)"]
    PADLOCK_PHE,
    #[doc = "CPUID.0C0000000H:EAX >= 0C0000001H AND CPUID.0C0000001H:EDX.PMM[Bits 13:12] = 11B ([12] = exists, [13] = enabled)"]
    PADLOCK_PMM,
    #[doc = "CPUID.0C0000000H:EAX >= 0C0000001H AND CPUID.0C0000001H:EDX.RNG[Bits 3:2] = 11B ([2] = exists, [3] = enabled)"]
    PADLOCK_RNG,
    #[doc = "`PAUSE` instruction (Pentium 4 or later)"]
    PAUSE,
    #[doc = "CPUID.01H:ECX.PCLMULQDQ[bit 1]"]
    PCLMULQDQ,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.PCOMMIT[bit 22]"]
    PCOMMIT,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EDX.PCONFIG[bit 18]"]
    PCONFIG,
    #[doc = "CPUID.(EAX=07H, ECX=0H):ECX.PKU[bit 3]"]
    PKU,
    #[doc = "CPUID.01H:ECX.POPCNT[bit 23]"]
    POPCNT,
    #[doc = "CPUID.80000001H:ECX.PREFETCHW[bit 8]"]
    PREFETCHW,
    #[doc = "CPUID.(EAX=07H, ECX=0H):ECX.PREFETCHWT1[bit 0]"]
    PREFETCHWT1,
    #[doc = "CPUID.(EAX=14H, ECX=0H):EBX.PTWRITE[bit 4]"]
    PTWRITE,
    #[doc = "CPUID.(EAX=07H, ECX=0H):ECX.RDPID[bit 22]"]
    RDPID,
    #[doc = "`RDPMC` instruction (Pentium MMX or later, or Pentium Pro or later)"]
    RDPMC,
    #[doc = "CPUID.80000008H:EBX.RDPRU[bit 4]"]
    RDPRU,
    #[doc = "CPUID.01H:ECX.RDRAND[bit 30]"]
    RDRAND,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.RDSEED[bit 18]"]
    RDSEED,
    #[doc = "CPUID.80000001H:EDX.RDTSCP[bit 27]"]
    RDTSCP,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.RTM[bit 11]"]
    RTM,
    #[doc = "CPUID.01H:EDX.SEP[bit 11]"]
    SEP,
    #[doc = "CPUID.(EAX=12H, ECX=0H):EAX.SGX1[bit 0]"]
    SGX1,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.SHA[bit 29]"]
    SHA,
    #[doc = "CPUID.80000001H:ECX.SKINIT[bit 12]"]
    SKINIT,
    #[doc = "`SKINIT` or `SVML`"]
    SKINIT_or_SVML,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EBX.SMAP[bit 20]"]
    SMAP,
    #[doc = "CPUID.01H:ECX.SMX[bit 6]"]
    SMX,
    #[doc = "CPUID.01H:EDX.SSE[bit 25]"]
    SSE,
    #[doc = "CPUID.01H:EDX.SSE2[bit 26]"]
    SSE2,
    #[doc = "CPUID.01H:ECX.SSE3[bit 0]"]
    SSE3,
    #[doc = "CPUID.01H:ECX.SSE4_1[bit 19]"]
    SSE4_1,
    #[doc = "CPUID.01H:ECX.SSE4_2[bit 20]"]
    SSE4_2,
    #[doc = "CPUID.80000001H:ECX.SSE4A[bit 6]"]
    SSE4A,
    #[doc = "CPUID.01H:ECX.SSSE3[bit 9]"]
    SSSE3,
    #[doc = "CPUID.80000001H:ECX.SVM[bit 2]"]
    SVM,
    #[doc = "CPUID.8000000AH:EDX.SVML[bit 2]"]
    SVML,
    #[doc = "CPUID.80000001H:EDX.SYSCALL[bit 11]"]
    SYSCALL,
    #[doc = "CPUID.80000001H:ECX.TBM[bit 21]"]
    TBM,
    #[doc = "CPUID.01H:EDX.TSC[bit 4]"]
    TSC,
    #[doc = "CPUID.(EAX=07H, ECX=0H):ECX.VAES[bit 9]"]
    VAES,
    #[doc = "CPUID.01H:ECX.VMX[bit 5]"]
    VMX,
    #[doc = "CPUID.(EAX=07H, ECX=0H):ECX.VPCLMULQDQ[bit 10]"]
    VPCLMULQDQ,
    #[doc = "CPUID.(EAX=07H, ECX=0H):ECX.WAITPKG[bit 5]"]
    WAITPKG,
    #[doc = "CPUID.(EAX=80000008H, ECX=0H):EBX.WBNOINVD[bit 9]"]
    WBNOINVD,
    #[doc = "CPUID.80000001H:ECX.XOP[bit 11]"]
    XOP,
    #[doc = "CPUID.01H:ECX.XSAVE[bit 26]"]
    XSAVE,
    #[doc = "CPUID.(EAX=0DH, ECX=1H):EAX.XSAVEC[bit 1]"]
    XSAVEC,
    #[doc = "CPUID.(EAX=0DH, ECX=1H):EAX.XSAVEOPT[bit 0]"]
    XSAVEOPT,
    #[doc = "CPUID.(EAX=0DH, ECX=1H):EAX.XSAVES[bit 3]"]
    XSAVES,
    #[doc = "CPUID.8000001FH:EAX.SNP[bit 4]"]
    SNP,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EDX.SERIALIZE[bit 14]"]
    SERIALIZE,
    #[doc = "CPUID.(EAX=07H, ECX=0H):EDX.TSXLDTRK[bit 16]"]
    TSXLDTRK,
}
impl CpuidFeature {
    #[doc = r" The number of declared features."]
    pub const COUNT: usize = 133usize;
}
#[doc = r" Metadata for every declared feature, in declaration order."]
#[doc = r""]
#[doc = r" `FEATURES[feature as usize]` is the entry for `feature`."]
pub static FEATURES : [CpuidFeatureInfo ; 133usize] = [CpuidFeatureInfo { feature : CpuidFeature :: INTEL8086 , name : "INTEL8086" , docs : "8086 or later" , } , CpuidFeatureInfo { feature : CpuidFeature :: INTEL8086_ONLY , name : "INTEL8086_ONLY" , docs : "8086 only" , } , CpuidFeatureInfo { feature : CpuidFeature :: INTEL186 , name : "INTEL186" , docs : "80186 or later" , } , CpuidFeatureInfo { feature : CpuidFeature :: INTEL286 , name : "INTEL286" , docs : "80286 or later" , } , CpuidFeatureInfo { feature : CpuidFeature :: INTEL286_ONLY , name : "INTEL286_ONLY" , docs : "80286 only" , } , CpuidFeatureInfo { feature : CpuidFeature :: INTEL386 , name : "INTEL386" , docs : "80386 or later" , } , CpuidFeatureInfo { feature : CpuidFeature :: INTEL386_ONLY , name : "INTEL386_ONLY" , docs : "80386 only" , } , CpuidFeatureInfo { feature : CpuidFeature :: INTEL386_A0_ONLY , name : "INTEL386_A0_ONLY" , docs : "80386 A0-B0 stepping only (`XBTS`, `IBTS` instructions)" , } , CpuidFeatureInfo { feature : CpuidFeature :: INTEL486 , name : "INTEL486" , docs : "Intel486 or later" , } , CpuidFeatureInfo { feature : CpuidFeature :: INTEL486_A_ONLY , name : "INTEL486_A_ONLY" , docs : "Intel486 A stepping only (`CMPXCHG`)" , } , CpuidFeatureInfo { feature : CpuidFeature :: INTEL386_486_ONLY , name : "INTEL386_486_ONLY" , docs : "80386 and Intel486 only" , } , CpuidFeatureInfo { feature : CpuidFeature :: IA64 , name : "IA64" , docs : "IA-64" , } , CpuidFeatureInfo { feature : CpuidFeature :: X64 , name : "X64" , docs : "CPUID.80000001H:EDX.LM[bit 29]" , } , CpuidFeatureInfo { feature : CpuidFeature :: ADX , name : "ADX" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.ADX[bit 19]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AES , name : "AES" , docs : "CPUID.01H:ECX.AES[bit 25]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AVX , name : "AVX" , docs : "CPUID.01H:ECX.AVX[bit 28]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AVX2 , name : "AVX2" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.AVX2[bit 5]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AVX512_4FMAPS , name : "AVX512_4FMAPS" , docs : "CPUID.(EAX=07H, ECX=0H):EDX.AVX512_4FMAPS[bit 3]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AVX512_4VNNIW , name : "AVX512_4VNNIW" , docs : "CPUID.(EAX=07H, ECX=0H):EDX.AVX512_4VNNIW[bit 2]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AVX512_BF16 , name : "AVX512_BF16" , docs : "CPUID.(EAX=07H, ECX=1H):EAX[bit 5]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AVX512_BITALG , name : "AVX512_BITALG" , docs : "CPUID.(EAX=07H, ECX=0H):ECX.AVX512_BITALG[bit 12]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AVX512_IFMA , name : "AVX512_IFMA" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.AVX512_IFMA[bit 21]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AVX512_VBMI , name : "AVX512_VBMI" , docs : "CPUID.(EAX=07H, ECX=0H):ECX.AVX512_VBMI[bit 1]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AVX512_VBMI2 , name : "AVX512_VBMI2" , docs : "CPUID.(EAX=07H, ECX=0H):ECX.AVX512_VBMI2[bit 6]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AVX512_VNNI , name : "AVX512_VNNI" , docs : "CPUID.(EAX=07H, ECX=0H):ECX.AVX512_VNNI[bit 11]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AVX512_VP2INTERSECT , name : "AVX512_VP2INTERSECT" , docs : "CPUID.(EAX=07H, ECX=0H):EDX[bit 08]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AVX512_VPOPCNTDQ , name : "AVX512_VPOPCNTDQ" , docs : "CPUID.(EAX=07H, ECX=0H):ECX.AVX512_VPOPCNTDQ[bit 14]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AVX512BW , name : "AVX512BW" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.AVX512BW[bit 30]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AVX512CD , name : "AVX512CD" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.AVX512CD[bit 28]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AVX512DQ , name : "AVX512DQ" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.AVX512DQ[bit 17]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AVX512ER , name : "AVX512ER" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.AVX512ER[bit 27]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AVX512F , name : "AVX512F" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.AVX512F[bit 16]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AVX512PF , name : "AVX512PF" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.AVX512PF[bit 26]" , } , CpuidFeatureInfo { feature : CpuidFeature :: AVX512VL , name : "AVX512VL" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.AVX512VL[bit 31]" , } , CpuidFeatureInfo { feature : CpuidFeature :: BMI1 , name : "BMI1" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.BMI1[bit 3]" , } , CpuidFeatureInfo { feature : CpuidFeature :: BMI2 , name : "BMI2" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.BMI2[bit 8]" , } , CpuidFeatureInfo { feature : CpuidFeature :: CET_IBT , name : "CET_IBT" , docs : "CPUID.(EAX=07H, ECX=0H):EDX.CET_IBT[bit 20]" , } , CpuidFeatureInfo { feature : CpuidFeature :: CET_SS , name : "CET_SS" , docs : "CPUID.(EAX=07H, ECX=0H):ECX.CET_SS[bit 7]" , } , CpuidFeatureInfo { feature : CpuidFeature :: CL1INVMB , name : "CL1INVMB" , docs : "`CL1INVMB` instruction (Intel SCC = Single-Chip Computer)" , } , CpuidFeatureInfo { feature : CpuidFeature :: CLDEMOTE , name : "CLDEMOTE" , docs : "CPUID.(EAX=07H, ECX=0H):ECX.CLDEMOTE[bit 25]" , } , CpuidFeatureInfo { feature : CpuidFeature :: CLFLUSHOPT , name : "CLFLUSHOPT" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.CLFLUSHOPT[bit 23]" , } , CpuidFeatureInfo { feature : CpuidFeature :: CLFSH , name : "CLFSH" , docs : "CPUID.01H:EDX.CLFSH[bit 19]" , } , CpuidFeatureInfo { feature : CpuidFeature :: CLWB , name : "CLWB" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.CLWB[bit 24]" , } , CpuidFeatureInfo { feature : CpuidFeature :: CLZERO , name : "CLZERO" , docs : "CPUID.80000008H:EBX.CLZERO[bit 0]" , } , CpuidFeatureInfo { feature : CpuidFeature :: CMOV , name : "CMOV" , docs : "CPUID.01H:EDX.CMOV[bit 15]" , } , CpuidFeatureInfo { feature : CpuidFeature :: CMPXCHG16B , name : "CMPXCHG16B" , docs : "CPUID.01H:ECX.CMPXCHG16B[bit 13]" , } , CpuidFeatureInfo { feature : CpuidFeature :: CPUID , name : "CPUID" , docs : "`RFLAGS.ID` can be toggled" , } , CpuidFeatureInfo { feature : CpuidFeature :: CX8 , name : "CX8" , docs : "CPUID.01H:EDX.CX8[bit 8]" , } , CpuidFeatureInfo { feature : CpuidFeature :: D3NOW , name : "D3NOW" , docs : "CPUID.80000001H:EDX.3DNOW[bit 31]" , } , CpuidFeatureInfo { feature : CpuidFeature :: D3NOWEXT , name : "D3NOWEXT" , docs : "CPUID.80000001H:EDX.3DNOWEXT[bit 30]" , } , CpuidFeatureInfo { feature : CpuidFeature :: ENCLV , name : "ENCLV" , docs : "CPUID.(EAX=12H, ECX=0H):EAX.OSS[bit 5]" , } , CpuidFeatureInfo { feature : CpuidFeature :: ENQCMD , name : "ENQCMD" , docs : "CPUID.(EAX=07H, ECX=0H):ECX[bit 29]" , } , CpuidFeatureInfo { feature : CpuidFeature :: F16C , name : "F16C" , docs : "CPUID.01H:ECX.F16C[bit 29]" , } , CpuidFeatureInfo { feature : CpuidFeature :: FMA , name : "FMA" , docs : "CPUID.01H:ECX.FMA[bit 12]" , } , CpuidFeatureInfo { feature : CpuidFeature :: FMA4 , name : "FMA4" , docs : "CPUID.80000001H:ECX.FMA4[bit 16]" , } , CpuidFeatureInfo { feature : CpuidFeature :: FPU , name : "FPU" , docs : "8087 or later (CPUID.01H:EDX.FPU[bit 0])" , } , CpuidFeatureInfo { feature : CpuidFeature :: FPU287 , name : "FPU287" , docs : "80287 or later" , } , CpuidFeatureInfo { feature : CpuidFeature :: FPU287XL_ONLY , name : "FPU287XL_ONLY" , docs : "80287XL only" , } , CpuidFeatureInfo { feature : CpuidFeature :: FPU387 , name : "FPU387" , docs : "80387 or later" , } , CpuidFeatureInfo { feature : CpuidFeature :: FPU387SL_ONLY , name : "FPU387SL_ONLY" , docs : "80387SL only" , } , CpuidFeatureInfo { feature : CpuidFeature :: FSGSBASE , name : "FSGSBASE" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.FSGSBASE[bit 0]" , } , CpuidFeatureInfo { feature : CpuidFeature :: FXSR , name : "FXSR" , docs : "CPUID.01H:EDX.FXSR[bit 24]" , } , CpuidFeatureInfo { feature : CpuidFeature :: GEODE , name : "GEODE" , docs : "AMD Geode LX/GX CPU" , } , CpuidFeatureInfo { feature : CpuidFeature :: GFNI , name : "GFNI" , docs : "CPUID.(EAX=07H, ECX=0H):ECX.GFNI[bit 8]" , } , CpuidFeatureInfo { feature : CpuidFeature :: HLE , name : "HLE" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.HLE[bit 4]" , } , CpuidFeatureInfo { feature : CpuidFeature :: HLE_or_RTM , name : "HLE_or_RTM" , docs : "`HLE` or `RTM`" , } , CpuidFeatureInfo { feature : CpuidFeature :: INVEPT , name : "INVEPT" , docs : "`VMX` and IA32_VMX_EPT_VPID_CAP[bit 20]" , } , CpuidFeatureInfo { feature : CpuidFeature :: INVPCID , name : "INVPCID" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.INVPCID[bit 10]" , } , CpuidFeatureInfo { feature : CpuidFeature :: INVVPID , name : "INVVPID" , docs : "`VMX` and IA32_VMX_EPT_VPID_CAP[bit 32]" , } , CpuidFeatureInfo { feature : CpuidFeature :: LWP , name : "LWP" , docs : "CPUID.80000001H:ECX.LWP[bit 15]" , } , CpuidFeatureInfo { feature : CpuidFeature :: LZCNT , name : "LZCNT" , docs : "CPUID.80000001H:ECX.LZCNT[bit 5]" , } , CpuidFeatureInfo { feature : CpuidFeature :: MCOMMIT , name : "MCOMMIT" , docs : "CPUID.80000008H:EBX.MCOMMIT[bit 8]" , } , CpuidFeatureInfo { feature : CpuidFeature :: MMX , name : "MMX" , docs : "CPUID.01H:EDX.MMX[bit 23]" , } , CpuidFeatureInfo { feature : CpuidFeature :: MONITOR , name : "MONITOR" , docs : "CPUID.01H:ECX.MONITOR[bit 3]" , } , CpuidFeatureInfo { feature : CpuidFeature :: MONITORX , name : "MONITORX" , docs : "CPUID.80000001H:ECX.MONITORX[bit 29]" , } , CpuidFeatureInfo { feature : CpuidFeature :: MOVBE , name : "MOVBE" , docs : "CPUID.01H:ECX.MOVBE[bit 22]" , } , CpuidFeatureInfo { feature : CpuidFeature :: MOVDIR64B , name : "MOVDIR64B" , docs : "CPUID.(EAX=07H, ECX=0H):ECX.MOVDIR64B[bit 28]" , } , CpuidFeatureInfo { feature : CpuidFeature :: MOVDIRI , name : "MOVDIRI" , docs : "CPUID.(EAX=07H, ECX=0H):ECX.MOVDIRI[bit 27]" , } , CpuidFeatureInfo { feature : CpuidFeature :: MPX , name : "MPX" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.MPX[bit 14]" , } , CpuidFeatureInfo { feature : CpuidFeature :: MSR , name : "MSR" , docs : "CPUID.01H:EDX.MSR[bit 5]" , } , CpuidFeatureInfo { feature : CpuidFeature :: MULTIBYTENOP , name : "MULTIBYTENOP" , docs : "Multi-byte nops (`0F1F /0`): CPUID.01H.EAX[Bits 11:8] = 0110B or 1111B" , } , CpuidFeatureInfo { feature : CpuidFeature :: PADLOCK_ACE , name : "PADLOCK_ACE" , docs : "CPUID.0C0000000H:EAX >= 0C0000001H AND CPUID.0C0000001H:EDX.ACE[Bits 7:6] = 11B ([6] = exists, [7] = enabled)" , } , CpuidFeatureInfo { feature : CpuidFeature :: PADLOCK_PHE , name : "PADLOCK_PHE" , docs : "CPUID.0C0000000H:EAX >= 0C0000001H AND CPUID.0C0000001H:EDX.PHE[Bits 11:10] = 11B ([10] = exists, [11] = enabled)" , } , CpuidFeatureInfo { feature : CpuidFeature :: PADLOCK_PMM , name : "PADLOCK_PMM" , docs : "CPUID.0C0000000H:EAX >= 0C0000001H AND CPUID.0C0000001H:EDX.PMM[Bits 13:12] = 11B ([12] = exists, [13] = enabled)" , } , CpuidFeatureInfo { feature : CpuidFeature :: PADLOCK_RNG , name : "PADLOCK_RNG" , docs : "CPUID.0C0000000H:EAX >= 0C0000001H AND CPUID.0C0000001H:EDX.RNG[Bits 3:2] = 11B ([2] = exists, [3] = enabled)" , } , CpuidFeatureInfo { feature : CpuidFeature :: PAUSE , name : "PAUSE" , docs : "`PAUSE` instruction (Pentium 4 or later)" , } , CpuidFeatureInfo { feature : CpuidFeature :: PCLMULQDQ , name : "PCLMULQDQ" , docs : "CPUID.01H:ECX.PCLMULQDQ[bit 1]" , } , CpuidFeatureInfo { feature : CpuidFeature :: PCOMMIT , name : "PCOMMIT" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.PCOMMIT[bit 22]" , } , CpuidFeatureInfo { feature : CpuidFeature :: PCONFIG , name : "PCONFIG" , docs : "CPUID.(EAX=07H, ECX=0H):EDX.PCONFIG[bit 18]" , } , CpuidFeatureInfo { feature : CpuidFeature :: PKU , name : "PKU" , docs : "CPUID.(EAX=07H, ECX=0H):ECX.PKU[bit 3]" , } , CpuidFeatureInfo { feature : CpuidFeature :: POPCNT , name : "POPCNT" , docs : "CPUID.01H:ECX.POPCNT[bit 23]" , } , CpuidFeatureInfo { feature : CpuidFeature :: PREFETCHW , name : "PREFETCHW" , docs : "CPUID.80000001H:ECX.PREFETCHW[bit 8]" , } , CpuidFeatureInfo { feature : CpuidFeature :: PREFETCHWT1 , name : "PREFETCHWT1" , docs : "CPUID.(EAX=07H, ECX=0H):ECX.PREFETCHWT1[bit 0]" , } , CpuidFeatureInfo { feature : CpuidFeature :: PTWRITE , name : "PTWRITE" , docs : "CPUID.(EAX=14H, ECX=0H):EBX.PTWRITE[bit 4]" , } , CpuidFeatureInfo { feature : CpuidFeature :: RDPID , name : "RDPID" , docs : "CPUID.(EAX=07H, ECX=0H):ECX.RDPID[bit 22]" , } , CpuidFeatureInfo { feature : CpuidFeature :: RDPMC , name : "RDPMC" , docs : "`RDPMC` instruction (Pentium MMX or later, or Pentium Pro or later)" , } , CpuidFeatureInfo { feature : CpuidFeature :: RDPRU , name : "RDPRU" , docs : "CPUID.80000008H:EBX.RDPRU[bit 4]" , } , CpuidFeatureInfo { feature : CpuidFeature :: RDRAND , name : "RDRAND" , docs : "CPUID.01H:ECX.RDRAND[bit 30]" , } , CpuidFeatureInfo { feature : CpuidFeature :: RDSEED , name : "RDSEED" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.RDSEED[bit 18]" , } , CpuidFeatureInfo { feature : CpuidFeature :: RDTSCP , name : "RDTSCP" , docs : "CPUID.80000001H:EDX.RDTSCP[bit 27]" , } , CpuidFeatureInfo { feature : CpuidFeature :: RTM , name : "RTM" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.RTM[bit 11]" , } , CpuidFeatureInfo { feature : CpuidFeature :: SEP , name : "SEP" , docs : "CPUID.01H:EDX.SEP[bit 11]" , } , CpuidFeatureInfo { feature : CpuidFeature :: SGX1 , name : "SGX1" , docs : "CPUID.(EAX=12H, ECX=0H):EAX.SGX1[bit 0]" , } , CpuidFeatureInfo { feature : CpuidFeature :: SHA , name : "SHA" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.SHA[bit 29]" , } , CpuidFeatureInfo { feature : CpuidFeature :: SKINIT , name : "SKINIT" , docs : "CPUID.80000001H:ECX.SKINIT[bit 12]" , } , CpuidFeatureInfo { feature : CpuidFeature :: SKINIT_or_SVML , name : "SKINIT_or_SVML" , docs : "`SKINIT` or `SVML`" , } , CpuidFeatureInfo { feature : CpuidFeature :: SMAP , name : "SMAP" , docs : "CPUID.(EAX=07H, ECX=0H):EBX.SMAP[bit 20]" , } , CpuidFeatureInfo { feature : CpuidFeature :: SMX , name : "SMX" , docs : "CPUID.01H:ECX.SMX[bit 6]" , } , CpuidFeatureInfo { feature : CpuidFeature :: SSE , name : "SSE" , docs : "CPUID.01H:EDX.SSE[bit 25]" , } , CpuidFeatureInfo { feature : CpuidFeature :: SSE2 , name : "SSE2" , docs : "CPUID.01H:EDX.SSE2[bit 26]" , } , CpuidFeatureInfo { feature : CpuidFeature :: SSE3 , name : "SSE3" , docs : "CPUID.01H:ECX.SSE3[bit 0]" , } , CpuidFeatureInfo { feature : CpuidFeature :: SSE4_1 , name : "SSE4_1" , docs : "CPUID.01H:ECX.SSE4_1[bit 19]" , } , CpuidFeatureInfo { feature : CpuidFeature :: SSE4_2 , name : "SSE4_2" , docs : "CPUID.01H:ECX.SSE4_2[bit 20]" , } , CpuidFeatureInfo { feature : CpuidFeature :: SSE4A , name : "SSE4A" , docs : "CPUID.80000001H:ECX.SSE4A[bit 6]" , } , CpuidFeatureInfo { feature : CpuidFeature :: SSSE3 , name : "SSSE3" , docs : "CPUID.01H:ECX.SSSE3[bit 9]" , } , CpuidFeatureInfo { feature : CpuidFeature :: SVM , name : "SVM" , docs : "CPUID.80000001H:ECX.SVM[bit 2]" , } , CpuidFeatureInfo { feature : CpuidFeature :: SVML , name : "SVML" , docs : "CPUID.8000000AH:EDX.SVML[bit 2]" , } , CpuidFeatureInfo { feature : CpuidFeature :: SYSCALL , name : "SYSCALL" , docs : "CPUID.80000001H:EDX.SYSCALL[bit 11]" , } , CpuidFeatureInfo { feature : CpuidFeature :: TBM , name : "TBM" , docs : "CPUID.80000001H:ECX.TBM[bit 21]" , } , CpuidFeatureInfo { feature : CpuidFeature :: TSC , name : "TSC" , docs : "CPUID.01H:EDX.TSC[bit 4]" , } , CpuidFeatureInfo { feature : CpuidFeature :: VAES , name : "VAES" , docs : "CPUID.(EAX=07H, ECX=0H):ECX.VAES[bit 9]" , } , CpuidFeatureInfo { feature : CpuidFeature :: VMX , name : "VMX" , docs : "CPUID.01H:ECX.VMX[bit 5]" , } , CpuidFeatureInfo { feature : CpuidFeature :: VPCLMULQDQ , name : "VPCLMULQDQ" , docs : "CPUID.(EAX=07H, ECX=0H):ECX.VPCLMULQDQ[bit 10]" , } , CpuidFeatureInfo { feature : CpuidFeature :: WAITPKG , name : "WAITPKG" , docs : "CPUID.(EAX=07H, ECX=0H):ECX.WAITPKG[bit 5]" , } , CpuidFeatureInfo { feature : CpuidFeature :: WBNOINVD , name : "WBNOINVD" , docs : "CPUID.(EAX=80000008H, ECX=0H):EBX.WBNOINVD[bit 9]" , } , CpuidFeatureInfo { feature : CpuidFeature :: XOP , name : "XOP" , docs : "CPUID.80000001H:ECX.XOP[bit 11]" , } , CpuidFeatureInfo { feature : CpuidFeature :: XSAVE , name : "XSAVE" , docs : "CPUID.01H:ECX.XSAVE[bit 26]" , } , CpuidFeatureInfo { feature : CpuidFeature :: XSAVEC , name : "XSAVEC" , docs : "CPUID.(EAX=0DH, ECX=1H):EAX.XSAVEC[bit 1]" , } , CpuidFeatureInfo { feature : CpuidFeature :: XSAVEOPT , name : "XSAVEOPT" , docs : "CPUID.(EAX=0DH, ECX=1H):EAX.XSAVEOPT[bit 0]" , } , CpuidFeatureInfo { feature : CpuidFeature :: XSAVES , name : "XSAVES" , docs : "CPUID.(EAX=0DH, ECX=1H):EAX.XSAVES[bit 3]" , } , CpuidFeatureInfo { feature : CpuidFeature :: SNP , name : "SNP" , docs : "CPUID.8000001FH:EAX.SNP[bit 4]" , } , CpuidFeatureInfo { feature : CpuidFeature :: SERIALIZE , name : "SERIALIZE" , docs : "CPUID.(EAX=07H, ECX=0H):EDX.SERIALIZE[bit 14]" , } , CpuidFeatureInfo { feature : CpuidFeature :: TSXLDTRK , name : "TSXLDTRK" , docs : "CPUID.(EAX=07H, ECX=0H):EDX.TSXLDTRK[bit 16]" , } ,] ;
#[doc = r" Feature name to feature map."]
pub(crate) static BY_NAME: phf::Map<&'static str, CpuidFeature> = phf::phf_map! { "INTEL8086" => CpuidFeature :: INTEL8086 , "INTEL8086_ONLY" => CpuidFeature :: INTEL8086_ONLY , "INTEL186" => CpuidFeature :: INTEL186 , "INTEL286" => CpuidFeature :: INTEL286 , "INTEL286_ONLY" => CpuidFeature :: INTEL286_ONLY , "INTEL386" => CpuidFeature :: INTEL386 , "INTEL386_ONLY" => CpuidFeature :: INTEL386_ONLY , "INTEL386_A0_ONLY" => CpuidFeature :: INTEL386_A0_ONLY , "INTEL486" => CpuidFeature :: INTEL486 , "INTEL486_A_ONLY" => CpuidFeature :: INTEL486_A_ONLY , "INTEL386_486_ONLY" => CpuidFeature :: INTEL386_486_ONLY , "IA64" => CpuidFeature :: IA64 , "X64" => CpuidFeature :: X64 , "ADX" => CpuidFeature :: ADX , "AES" => CpuidFeature :: AES , "AVX" => CpuidFeature :: AVX , "AVX2" => CpuidFeature :: AVX2 , "AVX512_4FMAPS" => CpuidFeature :: AVX512_4FMAPS , "AVX512_4VNNIW" => CpuidFeature :: AVX512_4VNNIW , "AVX512_BF16" => CpuidFeature :: AVX512_BF16 , "AVX512_BITALG" => CpuidFeature :: AVX512_BITALG , "AVX512_IFMA" => CpuidFeature :: AVX512_IFMA , "AVX512_VBMI" => CpuidFeature :: AVX512_VBMI , "AVX512_VBMI2" => CpuidFeature :: AVX512_VBMI2 , "AVX512_VNNI" => CpuidFeature :: AVX512_VNNI , "AVX512_VP2INTERSECT" => CpuidFeature :: AVX512_VP2INTERSECT , "AVX512_VPOPCNTDQ" => CpuidFeature :: AVX512_VPOPCNTDQ , "AVX512BW" => CpuidFeature :: AVX512BW , "AVX512CD" => CpuidFeature :: AVX512CD , "AVX512DQ" => CpuidFeature :: AVX512DQ , "AVX512ER" => CpuidFeature :: AVX512ER , "AVX512F" => CpuidFeature :: AVX512F , "AVX512PF" => CpuidFeature :: AVX512PF , "AVX512VL" => CpuidFeature :: AVX512VL , "BMI1" => CpuidFeature :: BMI1 , "BMI2" => CpuidFeature :: BMI2 , "CET_IBT" => CpuidFeature :: CET_IBT , "CET_SS" => CpuidFeature :: CET_SS , "CL1INVMB" => CpuidFeature :: CL1INVMB , "CLDEMOTE" => CpuidFeature :: CLDEMOTE , "CLFLUSHOPT" => CpuidFeature :: CLFLUSHOPT , "CLFSH" => CpuidFeature :: CLFSH , "CLWB" => CpuidFeature :: CLWB , "CLZERO" => CpuidFeature :: CLZERO , "CMOV" => CpuidFeature :: CMOV , "CMPXCHG16B" => CpuidFeature :: CMPXCHG16B , "CPUID" => CpuidFeature :: CPUID , "CX8" => CpuidFeature :: CX8 , "D3NOW" => CpuidFeature :: D3NOW , "D3NOWEXT" => CpuidFeature :: D3NOWEXT , "ENCLV" => CpuidFeature :: ENCLV , "ENQCMD" => CpuidFeature :: ENQCMD , "F16C" => CpuidFeature :: F16C , "FMA" => CpuidFeature :: FMA , "FMA4" => CpuidFeature :: FMA4 , "FPU" => CpuidFeature :: FPU , "FPU287" => CpuidFeature :: FPU287 , "FPU287XL_ONLY" => CpuidFeature :: FPU287XL_ONLY , "FPU387" => CpuidFeature :: FPU387 , "FPU387SL_ONLY" => CpuidFeature :: FPU387SL_ONLY , "FSGSBASE" => CpuidFeature :: FSGSBASE , "FXSR" => CpuidFeature :: FXSR , "GEODE" => CpuidFeature :: GEODE , "GFNI" => CpuidFeature :: GFNI , "HLE" => CpuidFeature :: HLE , "HLE_or_RTM" => CpuidFeature :: HLE_or_RTM , "INVEPT" => CpuidFeature :: INVEPT , "INVPCID" => CpuidFeature :: INVPCID , "INVVPID" => CpuidFeature :: INVVPID , "LWP" => CpuidFeature :: LWP , "LZCNT" => CpuidFeature :: LZCNT , "MCOMMIT" => CpuidFeature :: MCOMMIT , "MMX" => CpuidFeature :: MMX , "MONITOR" => CpuidFeature :: MONITOR , "MONITORX" => CpuidFeature :: MONITORX , "MOVBE" => CpuidFeature :: MOVBE , "MOVDIR64B" => CpuidFeature :: MOVDIR64B , "MOVDIRI" => CpuidFeature :: MOVDIRI , "MPX" => CpuidFeature :: MPX , "MSR" => CpuidFeature :: MSR , "MULTIBYTENOP" => CpuidFeature :: MULTIBYTENOP , "PADLOCK_ACE" => CpuidFeature :: PADLOCK_ACE , "PADLOCK_PHE" => CpuidFeature :: PADLOCK_PHE , "PADLOCK_PMM" => CpuidFeature :: PADLOCK_PMM , "PADLOCK_RNG" => CpuidFeature :: PADLOCK_RNG , "PAUSE" => CpuidFeature :: PAUSE , "PCLMULQDQ" => CpuidFeature :: PCLMULQDQ , "PCOMMIT" => CpuidFeature :: PCOMMIT , "PCONFIG" => CpuidFeature :: PCONFIG , "PKU" => CpuidFeature :: PKU , "POPCNT" => CpuidFeature :: POPCNT , "PREFETCHW" => CpuidFeature :: PREFETCHW , "PREFETCHWT1" => CpuidFeature :: PREFETCHWT1 , "PTWRITE" => CpuidFeature :: PTWRITE , "RDPID" => CpuidFeature :: RDPID , "RDPMC" => CpuidFeature :: RDPMC , "RDPRU" => CpuidFeature :: RDPRU , "RDRAND" => CpuidFeature :: RDRAND , "RDSEED" => CpuidFeature :: RDSEED , "RDTSCP" => CpuidFeature :: RDTSCP , "RTM" => CpuidFeature :: RTM , "SEP" => CpuidFeature :: SEP , "SGX1" => CpuidFeature :: SGX1 , "SHA" => CpuidFeature :: SHA , "SKINIT" => CpuidFeature :: SKINIT , "SKINIT_or_SVML" => CpuidFeature :: SKINIT_or_SVML , "SMAP" => CpuidFeature :: SMAP , "SMX" => CpuidFeature :: SMX , "SSE" => CpuidFeature :: SSE , "SSE2" => CpuidFeature :: SSE2 , "SSE3" => CpuidFeature :: SSE3 , "SSE4_1" => CpuidFeature :: SSE4_1 , "SSE4_2" => CpuidFeature :: SSE4_2 , "SSE4A" => CpuidFeature :: SSE4A , "SSSE3" => CpuidFeature :: SSSE3 , "SVM" => CpuidFeature :: SVM , "SVML" => CpuidFeature :: SVML , "SYSCALL" => CpuidFeature :: SYSCALL , "TBM" => CpuidFeature :: TBM , "TSC" => CpuidFeature :: TSC , "VAES" => CpuidFeature :: VAES , "VMX" => CpuidFeature :: VMX , "VPCLMULQDQ" => CpuidFeature :: VPCLMULQDQ , "WAITPKG" => CpuidFeature :: WAITPKG , "WBNOINVD" => CpuidFeature :: WBNOINVD , "XOP" => CpuidFeature :: XOP , "XSAVE" => CpuidFeature :: XSAVE , "XSAVEC" => CpuidFeature :: XSAVEC , "XSAVEOPT" => CpuidFeature :: XSAVEOPT , "XSAVES" => CpuidFeature :: XSAVES , "SNP" => CpuidFeature :: SNP , "SERIALIZE" => CpuidFeature :: SERIALIZE , "TSXLDTRK" => CpuidFeature :: TSXLDTRK , };
